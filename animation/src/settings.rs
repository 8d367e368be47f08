use bevy::prelude::*;

#[derive(Resource, Clone, Debug, Reflect)]
#[reflect(Resource)]
pub struct AnimationSettings {
    // how long a pulse rests on each extreme before reversing
    pub pulse_pause_secs: f32,
    // move-to-target is done once this close to the destination
    pub arrival_epsilon: f32,
    /// When set, move-to-target ignores the caller's speed and uses this instead.
    /// Defaults to the fixed 3.0 units/sec the reactions were tuned against.
    pub move_to_target_speed_override: Option<f32>,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            pulse_pause_secs: 0.1,
            arrival_epsilon: 0.01,
            move_to_target_speed_override: Some(3.0),
        }
    }
}

impl AnimationSettings {
    pub fn move_to_target_speed(&self, requested: f32) -> f32 {
        self.move_to_target_speed_override.unwrap_or(requested)
    }
}
