use crate::{pulse::Pulse, AnimationHandle};
use bevy::{ecs::world::Command, prelude::*};

pub trait AnimationCommandsExt {
    fn stop_animation(&mut self, handle: AnimationHandle);
    fn request_pulse_stop(&mut self, handle: AnimationHandle);
}

impl<'w, 's> AnimationCommandsExt for Commands<'w, 's> {
    fn stop_animation(&mut self, handle: AnimationHandle) {
        self.add(StopAnimationCommand { handle })
    }

    fn request_pulse_stop(&mut self, handle: AnimationHandle) {
        self.add(RequestPulseStopCommand { handle })
    }
}

struct StopAnimationCommand {
    handle: AnimationHandle,
}

impl Command for StopAnimationCommand {
    fn apply(self, world: &mut World) {
        // Stopping an animation that already finished is expected and not worth logging.
        if let Some(animator) = world.get_entity_mut(self.handle.entity()) {
            animator.despawn();
        }
    }
}

struct RequestPulseStopCommand {
    handle: AnimationHandle,
}

impl Command for RequestPulseStopCommand {
    fn apply(self, world: &mut World) {
        match world.get_mut::<Pulse>(self.handle.entity()) {
            Some(mut pulse) => pulse.request_stop(),
            None => debug!("No pulse running for {:?}", self.handle),
        }
    }
}
