mod demo;

use animation::AnimationPlugin;
use bevy::prelude::*;
use demo::DemoPlugin;
use reactions::ReactionsPlugin;

pub struct UiMotionPlugin;

impl Plugin for UiMotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "ui motion".into(),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((AnimationPlugin, ReactionsPlugin, DemoPlugin));

        #[cfg(feature = "dev-inspector")]
        app.add_plugins(bevy_inspector_egui::quick::WorldInspectorPlugin::new());
    }
}
