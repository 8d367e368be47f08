use animation::{AnimationHandle, AnimationSet, UiAnimations};
use bevy::prelude::*;
use bevy_turborand::{DelegatedRng, GlobalRng};
use reactions::{emoji::ReactionEmoji, ReactionRequest};

// Sprites are sized in world units, the camera zooms in so one unit is a hundred pixels.
const PIXELS_PER_UNIT: f32 = 100.0;
const EMOJI_SIZE: f32 = 0.64;
const EYE_SIZE: f32 = 0.1;

#[derive(Component, Debug, Default)]
pub struct Coin {
    // where the coin rests between flights, a restarted flight begins here rather than mid-air
    home: Vec3,
    flight: Option<AnimationHandle>,
}

impl Coin {
    pub fn new(home: Vec3) -> Self {
        Self { home, flight: None }
    }
}

#[derive(Component, Debug, Default)]
pub struct Badge;

pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GlobalRng>();

        app.add_systems(Startup, (setup_scene, start_badge_pulse).chain());
        // Coin flights are (re)started before animations tick so a stopped flight can't nudge the coin first.
        app.add_systems(
            Update,
            (request_reactions, fly_coin.before(AnimationSet::Tick)),
        );
    }
}

fn spawn_emoji(commands: &mut Commands, emoji: ReactionEmoji, position: Vec3, color: Color) {
    let eye_color = Color::srgb(0.1, 0.1, 0.1);

    commands
        .spawn((
            emoji,
            SpriteBundle {
                sprite: Sprite {
                    color,
                    custom_size: Some(Vec2::splat(EMOJI_SIZE)),
                    ..default()
                },
                transform: Transform::from_translation(position),
                visibility: Visibility::Hidden,
                ..default()
            },
        ))
        .with_children(|parent| {
            for x in [-0.12, 0.12] {
                parent.spawn(SpriteBundle {
                    sprite: Sprite {
                        color: eye_color,
                        custom_size: Some(Vec2::splat(EYE_SIZE)),
                        ..default()
                    },
                    transform: Transform::from_xyz(x, 0.08, 0.1),
                    ..default()
                });
            }
        });
}

pub fn setup_scene(mut commands: Commands) {
    let mut camera = Camera2dBundle::default();
    camera.projection.scale = 1.0 / PIXELS_PER_UNIT;
    commands.spawn(camera);

    spawn_emoji(
        &mut commands,
        ReactionEmoji::Happy,
        Vec3::new(-1.5, -1.0, 0.0),
        Color::srgb(1.0, 0.85, 0.2),
    );
    spawn_emoji(
        &mut commands,
        ReactionEmoji::Angry,
        Vec3::new(1.5, -1.0, 0.0),
        Color::srgb(0.9, 0.2, 0.2),
    );

    commands.spawn((
        Badge,
        SpriteBundle {
            sprite: Sprite {
                color: Color::srgb(0.3, 0.8, 0.4),
                custom_size: Some(Vec2::splat(0.5)),
                ..default()
            },
            transform: Transform::from_xyz(0.0, 1.5, 0.0),
            ..default()
        },
    ));

    let coin_home = Vec3::new(0.0, -2.0, 0.0);
    commands.spawn((
        Coin::new(coin_home),
        SpriteBundle {
            sprite: Sprite {
                color: Color::srgb(0.95, 0.75, 0.1),
                custom_size: Some(Vec2::splat(0.25)),
                ..default()
            },
            transform: Transform::from_translation(coin_home),
            visibility: Visibility::Hidden,
            ..default()
        },
    ));

    info!("H: happy, J: stop happy, A: angry, S: stop angry, M: send the coin somewhere");
}

/// The badge breathes for as long as the app runs.
pub fn start_badge_pulse(badge_query: Query<Entity, With<Badge>>, mut animations: UiAnimations) {
    for badge_entity in badge_query.iter() {
        animations.pulse(badge_entity, Vec3::splat(1.15), Vec3::ONE, 0.8, false);
    }
}

pub fn request_reactions(
    keys: Res<ButtonInput<KeyCode>>,
    mut reaction_requests: EventWriter<ReactionRequest>,
) {
    let bindings = [
        (KeyCode::KeyH, ReactionRequest::PlayHappy),
        (KeyCode::KeyJ, ReactionRequest::StopHappy),
        (KeyCode::KeyA, ReactionRequest::PlayAngry),
        (KeyCode::KeyS, ReactionRequest::StopAngry),
    ];

    for (key, reaction_request) in bindings {
        if keys.just_pressed(key) {
            reaction_requests.send(reaction_request);
        }
    }
}

pub fn fly_coin(
    keys: Res<ButtonInput<KeyCode>>,
    mut coin_query: Query<(Entity, &mut Coin, &mut Transform)>,
    mut animations: UiAnimations,
    mut rng: ResMut<GlobalRng>,
) {
    if !keys.just_pressed(KeyCode::KeyM) {
        return;
    }

    for (coin_entity, mut coin, mut transform) in coin_query.iter_mut() {
        if let Some(flight) = coin.flight.take() {
            animations.stop(flight);
        }

        // The new flight remembers wherever the coin is now as the spot to return to.
        transform.translation = coin.home;

        let destination = Vec3::new((rng.f32() - 0.5) * 6.0, rng.f32() * 2.0, 0.0);
        info!("Coin heading to {:?}", destination);

        coin.flight = Some(animations.move_to_target(coin_entity, destination, 3.0));
    }
}
