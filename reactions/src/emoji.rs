use animation::AnimationHandle;
use bevy::prelude::*;

#[derive(Component, Debug, PartialEq, Eq, Copy, Clone, Reflect, Default)]
#[reflect(Component)]
pub enum ReactionEmoji {
    #[default]
    Happy,
    Angry,
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct ReactionSlot {
    entity: Entity,
    start_position: Vec3,
    pub(crate) handle: Option<AnimationHandle>,
}

impl ReactionSlot {
    pub fn new(entity: Entity, start_position: Vec3) -> Self {
        Self {
            entity,
            start_position,
            handle: None,
        }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    pub fn handle(&self) -> Option<AnimationHandle> {
        self.handle
    }
}

/// Where each reaction emoji lives and which animation, if any, it is currently playing.
#[derive(Resource, Debug, Default)]
pub struct ReactionSlots {
    pub(crate) happy: Option<ReactionSlot>,
    pub(crate) angry: Option<ReactionSlot>,
}

impl ReactionSlots {
    pub fn get(&self, emoji: ReactionEmoji) -> Option<&ReactionSlot> {
        match emoji {
            ReactionEmoji::Happy => self.happy.as_ref(),
            ReactionEmoji::Angry => self.angry.as_ref(),
        }
    }
}

/// Remember where each emoji starts so reactions can put it back when they finish.
pub fn register_reaction_emojis(
    emoji_query: Query<(Entity, &ReactionEmoji, &Transform), Added<ReactionEmoji>>,
    mut slots: ResMut<ReactionSlots>,
) {
    for (emoji_entity, emoji, transform) in emoji_query.iter() {
        let slot = ReactionSlot::new(emoji_entity, transform.translation);

        let existing = match emoji {
            ReactionEmoji::Happy => slots.happy.replace(slot),
            ReactionEmoji::Angry => slots.angry.replace(slot),
        };

        if let Some(existing) = existing {
            info!(
                "{:?} emoji {:?} replaced by {:?}",
                emoji,
                existing.entity(),
                emoji_entity
            );
        }
    }
}
