// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Top-level window handle
//!
//! Wraps the `ApplicationWindow` owned by the GTK application. The handle is
//! created by `App` and passed explicitly into `MainWindow::new` as its parent.

use gtk4::{prelude::*, Application, ApplicationWindow};

use crate::core::Parent;
use crate::ui::components::GtkContainer;

/// Title shown by the window manager
const WINDOW_TITLE: &str = "smdb-view";

/// The application's single top-level window
#[derive(Clone)]
pub struct RootWindow {
    window: ApplicationWindow,
}

impl RootWindow {
    /// Creates the top-level window for `app` (not yet presented)
    pub fn new(app: &Application) -> Self {
        let window = ApplicationWindow::builder()
            .application(app)
            .title(WINDOW_TITLE)
            .resizable(true)
            .build();

        Self { window }
    }

    /// Maps the window on screen
    pub fn present(&self) {
        self.window.present();
    }

    /// Destroys the window
    ///
    /// Once the application has no windows left, GTK leaves its main loop.
    pub fn destroy(&self) {
        self.window.destroy();
    }

    /// Runs `f` when the window manager asks to close the window
    ///
    /// The close always proceeds.
    pub fn connect_close_request<F: Fn() + 'static>(&self, f: F) {
        self.window.connect_close_request(move |_| {
            f();
            glib::Propagation::Proceed
        });
    }
}

impl Parent<GtkContainer> for RootWindow {
    fn adopt(&self, child: &GtkContainer) {
        self.window.set_child(Some(child.widget()));
    }
}
