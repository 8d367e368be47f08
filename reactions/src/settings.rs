use bevy::prelude::*;

#[derive(Resource, Clone, Debug, Reflect)]
#[reflect(Resource)]
pub struct ReactionSettings {
    pub happy_direction: Vec3,
    pub happy_duration: f32,
    pub happy_speed: f32,
    pub angry_max_scale: Vec3,
    pub angry_min_scale: Vec3,
    // seconds per half-cycle of the angry pulse
    pub angry_pulse_duration: f32,
}

impl Default for ReactionSettings {
    fn default() -> Self {
        Self {
            happy_direction: Vec3::Y,
            happy_duration: 1.0,
            happy_speed: 2.0,
            angry_max_scale: Vec3::splat(1.3),
            angry_min_scale: Vec3::ONE,
            angry_pulse_duration: 0.5,
        }
    }
}
