use bevy::prelude::*;
use ui_motion_lib::UiMotionPlugin;

fn main() {
    #[cfg(target_family = "wasm")]
    console_error_panic_hook::set_once();

    App::new().add_plugins(UiMotionPlugin).run();
}
