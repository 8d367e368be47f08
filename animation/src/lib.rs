pub mod commands;
pub mod move_and_fade;
pub mod move_to_target;
pub mod pulse;
pub mod settings;

use self::{
    commands::AnimationCommandsExt,
    move_and_fade::{move_and_fade, MoveAndFade},
    move_to_target::{move_to_target, MoveToTarget},
    pulse::{pulse, Pulse, PulsePhase},
    settings::AnimationSettings,
};
use bevy::{ecs::system::SystemParam, prelude::*};

/// Every running animation lives on its own animator entity. The handle is that entity.
/// Once the animation ends or is stopped the entity is gone and the handle goes stale for good.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Reflect)]
pub struct AnimationHandle(Entity);

impl AnimationHandle {
    pub fn entity(&self) -> Entity {
        self.0
    }
}

/// Marks an animator entity regardless of which animation it is running.
#[derive(Component, Debug, PartialEq, Copy, Clone, Reflect, Default)]
#[reflect(Component)]
pub struct Animator;

#[derive(SystemSet, Debug, PartialEq, Eq, Clone, Hash)]
pub enum AnimationSet {
    Tick,
}

/// Entry point for game code that wants to animate something. Take it as a system parameter.
#[derive(SystemParam)]
pub struct UiAnimations<'w, 's> {
    commands: Commands<'w, 's>,
    animator_query: Query<'w, 's, (), With<Animator>>,
}

impl<'w, 's> UiAnimations<'w, 's> {
    pub fn pulse(
        &mut self,
        target: Entity,
        max_scale: Vec3,
        min_scale: Vec3,
        duration: f32,
        stop_mid_way: bool,
    ) -> AnimationHandle {
        self.spawn_animator(
            "Pulse",
            Pulse::new(target, max_scale, min_scale, duration, stop_mid_way),
        )
    }

    pub fn move_and_fade(
        &mut self,
        target: Entity,
        start_position: Vec3,
        direction: Vec3,
        duration: f32,
        speed: f32,
    ) -> AnimationHandle {
        self.spawn_animator(
            "MoveAndFade",
            MoveAndFade::new(target, start_position, direction, duration, speed),
        )
    }

    pub fn move_to_target(
        &mut self,
        target: Entity,
        destination: Vec3,
        speed: f32,
    ) -> AnimationHandle {
        self.spawn_animator("MoveToTarget", MoveToTarget::new(target, destination, speed))
    }

    pub fn stop(&mut self, handle: AnimationHandle) {
        self.commands.stop_animation(handle);
    }

    pub fn request_pulse_stop(&mut self, handle: AnimationHandle) {
        self.commands.request_pulse_stop(handle);
    }

    /// Animators spawned during the current system aren't visible until commands are applied.
    pub fn is_running(&self, handle: AnimationHandle) -> bool {
        self.animator_query.contains(handle.entity())
    }

    fn spawn_animator(&mut self, name: &'static str, animation: impl Bundle) -> AnimationHandle {
        AnimationHandle(
            self.commands
                .spawn((Animator, Name::new(name), animation))
                .id(),
        )
    }
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationSettings>();

        app.register_type::<AnimationSettings>()
            .register_type::<Animator>()
            .register_type::<AnimationHandle>()
            .register_type::<Pulse>()
            .register_type::<PulsePhase>()
            .register_type::<MoveAndFade>()
            .register_type::<MoveToTarget>();

        // Chained so that two animations driving the same target always apply in the same order.
        app.add_systems(
            Update,
            (pulse, move_and_fade, move_to_target)
                .chain()
                .in_set(AnimationSet::Tick),
        );
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use test_utils::{is_running, setup, tick};

    #[test]
    fn stop_despawns_animator() {
        let mut app = setup();
        let target = app.world_mut().spawn(Transform::default()).id();

        let handle = app
            .world_mut()
            .run_system_once(move |mut animations: UiAnimations| {
                animations.pulse(target, Vec3::splat(2.0), Vec3::ONE, 1.0, false)
            });
        assert!(is_running(&app, handle));

        app.world_mut()
            .run_system_once(move |mut animations: UiAnimations| animations.stop(handle));
        assert!(!is_running(&app, handle));

        // Stopping a stale handle is harmless.
        app.world_mut()
            .run_system_once(move |mut animations: UiAnimations| animations.stop(handle));
        tick(&mut app, 0.125);
        assert_eq!(app.world().get::<Transform>(target).unwrap().scale, Vec3::ONE);
    }

    #[test]
    fn is_running_tracks_animator_lifetime() {
        let mut app = setup();
        let target = app
            .world_mut()
            .spawn((Transform::default(), Visibility::Hidden))
            .id();

        let handle = app
            .world_mut()
            .run_system_once(move |mut animations: UiAnimations| {
                animations.move_to_target(target, Vec3::ZERO, 3.0)
            });

        let running = app
            .world_mut()
            .run_system_once(move |animations: UiAnimations| animations.is_running(handle));
        assert!(running);

        // Already on the destination, so the first frame finishes it.
        tick(&mut app, 0.125);

        let running = app
            .world_mut()
            .run_system_once(move |animations: UiAnimations| animations.is_running(handle));
        assert!(!running);
    }
}
