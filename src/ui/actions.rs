//! Action handlers for the GTK host
//!
//! Binds the window's two actions to the real world: Greet writes to the
//! process standard output, Quit destroys the top-level window.

use crate::core::{Actions, Greeter};
use crate::ui::components::RootWindow;

/// Builds the action set for a window parented by `root`
pub fn build_actions(root: &RootWindow) -> Actions {
    let root_for_quit = root.clone();

    Actions::with_greeter(Greeter::stdout(), move || {
        root_for_quit.destroy();
    })
}
