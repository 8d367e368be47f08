pub mod emoji;
pub mod settings;

use self::{
    emoji::{register_reaction_emojis, ReactionEmoji, ReactionSlots},
    settings::ReactionSettings,
};
use animation::{AnimationSet, UiAnimations};
use bevy::{ecs::system::SystemParam, prelude::*};

#[derive(Event, Debug, PartialEq, Eq, Copy, Clone)]
pub enum ReactionRequest {
    PlayHappy,
    StopHappy,
    PlayAngry,
    StopAngry,
}

/// Canned emoji reactions. Game code either takes this as a system parameter or sends a `ReactionRequest`.
#[derive(SystemParam)]
pub struct Reactions<'w, 's> {
    animations: UiAnimations<'w, 's>,
    slots: ResMut<'w, ReactionSlots>,
    settings: Res<'w, ReactionSettings>,
    emoji_query: Query<'w, 's, (&'static mut Transform, &'static mut Visibility), With<ReactionEmoji>>,
}

impl<'w, 's> Reactions<'w, 's> {
    /// Float the happy emoji up from its start position while it fades out. Replays from the top if already playing.
    pub fn play_happy(&mut self) {
        let slot = match self.slots.happy.as_mut() {
            Some(slot) => slot,
            None => {
                warn!("No happy emoji registered");
                return;
            }
        };

        if let Some(handle) = slot.handle.take() {
            self.animations.stop(handle);
        }

        slot.handle = Some(self.animations.move_and_fade(
            slot.entity(),
            slot.start_position(),
            self.settings.happy_direction,
            self.settings.happy_duration,
            self.settings.happy_speed,
        ));

        debug!("Playing happy emoji {:?}", slot.entity());
    }

    pub fn stop_happy(&mut self) {
        let slot = match self.slots.happy.as_mut() {
            Some(slot) => slot,
            None => {
                warn!("No happy emoji registered");
                return;
            }
        };

        if let Some(handle) = slot.handle.take() {
            self.animations.stop(handle);
        }

        if let Ok((mut transform, mut visibility)) = self.emoji_query.get_mut(slot.entity()) {
            transform.translation = slot.start_position();
            *visibility = Visibility::Hidden;
        }
    }

    /// Show the angry emoji and pulse it until `stop_angry`. Playing again restarts the pulse
    /// rather than stacking a second one on the same emoji.
    pub fn play_angry(&mut self) {
        let slot = match self.slots.angry.as_mut() {
            Some(slot) => slot,
            None => {
                warn!("No angry emoji registered");
                return;
            }
        };

        let (mut transform, mut visibility) = match self.emoji_query.get_mut(slot.entity()) {
            Ok(emoji) => emoji,
            Err(_) => {
                warn!("Angry emoji {:?} no longer exists", slot.entity());
                return;
            }
        };

        *visibility = Visibility::Visible;

        if let Some(handle) = slot.handle.take() {
            self.animations.stop(handle);
        }

        transform.scale = Vec3::ONE;
        slot.handle = Some(self.animations.pulse(
            slot.entity(),
            self.settings.angry_max_scale,
            self.settings.angry_min_scale,
            self.settings.angry_pulse_duration,
            true,
        ));

        debug!("Playing angry emoji {:?}", slot.entity());
    }

    // The pulse winds down on its own next frame. Hiding happens right away.
    pub fn stop_angry(&mut self) {
        let slot = match self.slots.angry.as_ref() {
            Some(slot) => slot,
            None => {
                warn!("No angry emoji registered");
                return;
            }
        };

        if let Some(handle) = slot.handle() {
            self.animations.request_pulse_stop(handle);
        }

        if let Ok((_, mut visibility)) = self.emoji_query.get_mut(slot.entity()) {
            *visibility = Visibility::Hidden;
        }
    }
}

pub fn on_reaction_request(
    mut reaction_requests: EventReader<ReactionRequest>,
    mut reactions: Reactions,
) {
    for request in reaction_requests.read() {
        match request {
            ReactionRequest::PlayHappy => reactions.play_happy(),
            ReactionRequest::StopHappy => reactions.stop_happy(),
            ReactionRequest::PlayAngry => reactions.play_angry(),
            ReactionRequest::StopAngry => reactions.stop_angry(),
        }
    }
}

pub struct ReactionsPlugin;

impl Plugin for ReactionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ReactionSettings>();
        app.init_resource::<ReactionSlots>();
        app.add_event::<ReactionRequest>();

        app.register_type::<ReactionSettings>()
            .register_type::<ReactionEmoji>();

        app.add_systems(
            Update,
            (register_reaction_emojis, on_reaction_request)
                .chain()
                .before(AnimationSet::Tick),
        );
    }
}
