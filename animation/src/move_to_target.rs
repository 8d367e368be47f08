use crate::settings::AnimationSettings;
use bevy::prelude::*;

/// Slides `target` toward `destination`. On arrival the target jumps back to where it
/// started and is hidden, which makes it suitable for "fly to the counter" effects.
#[derive(Component, Debug, Clone, Reflect)]
pub struct MoveToTarget {
    target: Entity,
    destination: Vec3,
    speed: f32,
    origin: Option<Vec3>,
}

impl MoveToTarget {
    pub fn new(target: Entity, destination: Vec3, speed: f32) -> Self {
        Self {
            target,
            destination,
            speed,
            origin: None,
        }
    }

    pub fn target(&self) -> Entity {
        self.target
    }
}

fn move_towards(current: Vec3, target: Vec3, max_distance: f32) -> Vec3 {
    let offset = target - current;
    let distance = offset.length();

    if distance <= max_distance || distance == 0.0 {
        target
    } else {
        current + offset / distance * max_distance
    }
}

pub fn move_to_target(
    mut move_to_target_query: Query<(Entity, &mut MoveToTarget)>,
    mut target_query: Query<(&mut Transform, &mut Visibility)>,
    mut commands: Commands,
    settings: Res<AnimationSettings>,
    time: Res<Time>,
) {
    let delta = time.delta_seconds();

    for (animator_entity, mut movement) in move_to_target_query.iter_mut() {
        let (mut transform, mut visibility) = match target_query.get_mut(movement.target) {
            Ok(target) => target,
            Err(_) => {
                debug!("Move target {:?} has no Transform and Visibility", movement.target);
                commands.entity(animator_entity).despawn();
                continue;
            }
        };

        if movement.origin.is_none() {
            *visibility = Visibility::Visible;
            movement.origin = Some(transform.translation);
        }

        let origin = movement.origin.unwrap_or(transform.translation);

        if transform.translation.distance(movement.destination) > settings.arrival_epsilon {
            let step = settings.move_to_target_speed(movement.speed) * delta;
            transform.translation = move_towards(transform.translation, movement.destination, step);
        } else {
            transform.translation = origin;
            *visibility = Visibility::Hidden;
            commands.entity(animator_entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::{is_running, setup, tick},
        AnimationHandle, UiAnimations,
    };
    use bevy::ecs::system::RunSystemOnce;

    fn spawn_coin(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((Transform::default(), Visibility::Hidden))
            .id()
    }

    fn start_move(app: &mut App, target: Entity, speed: f32) -> AnimationHandle {
        app.world_mut()
            .run_system_once(move |mut animations: UiAnimations| {
                animations.move_to_target(target, Vec3::X, speed)
            })
    }

    fn translation_of(app: &App, entity: Entity) -> Vec3 {
        app.world().get::<Transform>(entity).unwrap().translation
    }

    #[test]
    fn move_towards_never_overshoots() {
        assert_eq!(move_towards(Vec3::ZERO, Vec3::X, 5.0), Vec3::X);
        assert_eq!(move_towards(Vec3::ZERO, Vec3::X, 0.25), Vec3::new(0.25, 0.0, 0.0));
        assert_eq!(move_towards(Vec3::X, Vec3::X, 0.25), Vec3::X);
    }

    #[test]
    fn arrives_then_restores_and_hides() {
        let mut app = setup();
        let coin = spawn_coin(&mut app);
        // Speed is overridden to 3.0 by default, so the requested 100.0 has no effect.
        let handle = start_move(&mut app, coin, 100.0);

        tick(&mut app, 0.125);
        assert_eq!(translation_of(&app, coin), Vec3::new(0.375, 0.0, 0.0));
        assert_eq!(
            *app.world().get::<Visibility>(coin).unwrap(),
            Visibility::Visible
        );

        tick(&mut app, 0.125);
        assert_eq!(translation_of(&app, coin), Vec3::new(0.75, 0.0, 0.0));

        tick(&mut app, 0.125);
        assert_eq!(translation_of(&app, coin), Vec3::X);
        assert!(is_running(&app, handle));

        tick(&mut app, 0.125);
        assert!(!is_running(&app, handle));
        assert_eq!(translation_of(&app, coin), Vec3::ZERO);
        assert_eq!(
            *app.world().get::<Visibility>(coin).unwrap(),
            Visibility::Hidden
        );
    }

    #[test]
    fn never_finishes_while_out_of_range() {
        let mut app = setup();
        app.world_mut()
            .resource_mut::<AnimationSettings>()
            .move_to_target_speed_override = None;
        let coin = spawn_coin(&mut app);
        let handle = start_move(&mut app, coin, 0.0);

        for _ in 0..50 {
            tick(&mut app, 0.125);
        }

        assert!(is_running(&app, handle));
        assert_eq!(translation_of(&app, coin), Vec3::ZERO);
    }

    #[test]
    fn honors_requested_speed_without_override() {
        let mut app = setup();
        app.world_mut()
            .resource_mut::<AnimationSettings>()
            .move_to_target_speed_override = None;
        let coin = spawn_coin(&mut app);
        start_move(&mut app, coin, 1.0);

        tick(&mut app, 0.125);
        assert_eq!(translation_of(&app, coin), Vec3::new(0.125, 0.0, 0.0));
    }

    #[test]
    fn finishes_inside_arrival_epsilon() {
        let mut app = setup();
        let coin = app
            .world_mut()
            .spawn((Transform::from_xyz(0.995, 0.0, 0.0), Visibility::Hidden))
            .id();
        let handle = start_move(&mut app, coin, 3.0);

        tick(&mut app, 0.125);

        assert!(!is_running(&app, handle));
        assert_eq!(translation_of(&app, coin), Vec3::new(0.995, 0.0, 0.0));
    }

    #[test]
    fn despawned_target_ends_move() {
        let mut app = setup();
        let coin = spawn_coin(&mut app);
        let handle = start_move(&mut app, coin, 3.0);

        app.world_mut().despawn(coin);
        tick(&mut app, 0.125);

        assert!(!is_running(&app, handle));
    }
}
