use crate::settings::AnimationSettings;
use bevy::prelude::*;

#[derive(Debug, PartialEq, Copy, Clone, Reflect)]
pub enum PulsePhase {
    Scaling,
    // resting on an extreme before heading back the other way
    Pausing { elapsed: f32 },
}

/// Scales `target` back and forth between two extremes until the animator is despawned
/// or, when started with `stop_mid_way`, until a stop is requested.
#[derive(Component, Debug, Clone, Reflect)]
pub struct Pulse {
    target: Entity,
    from: Vec3,
    to: Vec3,
    duration: f32,
    stop_mid_way: bool,
    stop_requested: bool,
    elapsed: f32,
    phase: PulsePhase,
}

impl Pulse {
    pub fn new(
        target: Entity,
        max_scale: Vec3,
        min_scale: Vec3,
        duration: f32,
        stop_mid_way: bool,
    ) -> Self {
        Self {
            target,
            from: max_scale,
            to: min_scale,
            duration,
            stop_mid_way,
            stop_requested: false,
            elapsed: 0.0,
            phase: PulsePhase::Scaling,
        }
    }

    pub fn target(&self) -> Entity {
        self.target
    }

    pub fn phase(&self) -> PulsePhase {
        self.phase
    }

    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    /// Stop requests only count when the pulse was started with `stop_mid_way`.
    /// Otherwise they are dropped and the pulse keeps going.
    pub fn should_stop(&self) -> bool {
        self.stop_mid_way && self.stop_requested
    }

    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }

        (self.elapsed / self.duration).min(1.0)
    }

    fn current_scale(&self) -> Vec3 {
        let progress = self.progress();

        if progress >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, progress)
        }
    }

    fn reverse(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        self.elapsed = 0.0;
        self.phase = PulsePhase::Scaling;
    }
}

pub fn pulse(
    mut pulse_query: Query<(Entity, &mut Pulse)>,
    mut transform_query: Query<&mut Transform>,
    mut commands: Commands,
    settings: Res<AnimationSettings>,
    time: Res<Time>,
) {
    let delta = time.delta_seconds();

    for (animator_entity, mut pulse) in pulse_query.iter_mut() {
        // Target was despawned out from under the animation. Nothing left to scale.
        let mut transform = match transform_query.get_mut(pulse.target) {
            Ok(transform) => transform,
            Err(_) => {
                debug!("Pulse target {:?} has no Transform", pulse.target);
                commands.entity(animator_entity).despawn();
                continue;
            }
        };

        // The next half-cycle starts on the same frame the pause runs out.
        if let PulsePhase::Pausing { elapsed } = pulse.phase {
            let elapsed = elapsed + delta;

            if elapsed < settings.pulse_pause_secs {
                pulse.phase = PulsePhase::Pausing { elapsed };
                continue;
            }

            pulse.reverse();
        }

        if pulse.should_stop() {
            commands.entity(animator_entity).despawn();
            continue;
        }

        pulse.elapsed += delta;
        transform.scale = pulse.current_scale();

        if pulse.elapsed >= pulse.duration {
            pulse.phase = PulsePhase::Pausing { elapsed: 0.0 };
        }
    }
}
