use bevy::{color::Alpha, hierarchy::HierarchyQueryExt, prelude::*};

/// Drifts `target` along `direction` while fading out every `Sprite` on it and its descendants.
/// Once `duration` has elapsed the target snaps back to `start_position` and is hidden.
#[derive(Component, Debug, Clone, Reflect)]
pub struct MoveAndFade {
    target: Entity,
    start_position: Vec3,
    direction: Vec3,
    duration: f32,
    speed: f32,
    elapsed: f32,
    // `None` until the first frame gathers the sprites to fade.
    renderers: Option<Vec<Entity>>,
}

impl MoveAndFade {
    pub fn new(
        target: Entity,
        start_position: Vec3,
        direction: Vec3,
        duration: f32,
        speed: f32,
    ) -> Self {
        Self {
            target,
            start_position,
            direction,
            duration,
            speed,
            elapsed: 0.0,
            renderers: None,
        }
    }

    pub fn target(&self) -> Entity {
        self.target
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }

        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

pub fn move_and_fade(
    mut move_and_fade_query: Query<(Entity, &mut MoveAndFade)>,
    mut target_query: Query<(&mut Transform, &mut Visibility)>,
    children_query: Query<&Children>,
    mut sprite_query: Query<&mut Sprite>,
    mut commands: Commands,
    time: Res<Time>,
) {
    let delta = time.delta_seconds();

    for (animator_entity, mut fade) in move_and_fade_query.iter_mut() {
        let (mut transform, mut visibility) = match target_query.get_mut(fade.target) {
            Ok(target) => target,
            Err(_) => {
                debug!("Fade target {:?} has no Transform and Visibility", fade.target);
                commands.entity(animator_entity).despawn();
                continue;
            }
        };

        if fade.renderers.is_none() {
            *visibility = Visibility::Visible;

            let renderers = std::iter::once(fade.target)
                .chain(children_query.iter_descendants(fade.target))
                .filter(|entity| sprite_query.contains(*entity))
                .collect::<Vec<_>>();

            // NOTE: the target stays visible, it was shown above before the sprite lookup.
            if renderers.is_empty() {
                error!("{:?} has no Sprite to fade", fade.target);
                commands.entity(animator_entity).despawn();
                continue;
            }

            transform.translation = fade.start_position;
            fade.renderers = Some(renderers);
        }

        fade.elapsed += delta;

        let rotation = transform.rotation;
        transform.translation += rotation * (fade.direction * fade.speed * delta);

        let alpha = 1.0 - fade.progress();
        for renderer in fade.renderers.iter().flatten() {
            if let Ok(mut sprite) = sprite_query.get_mut(*renderer) {
                sprite.color.set_alpha(alpha);
            }
        }

        if fade.is_finished() {
            transform.translation = fade.start_position;
            *visibility = Visibility::Hidden;
            commands.entity(animator_entity).despawn();
        }
    }
}
