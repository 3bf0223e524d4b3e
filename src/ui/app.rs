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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Owns AppState (the single MainWindow)
//!   ├─ Builds RootWindow and passes it to MainWindow::new
//!   └─ Wires host close requests back into the MainWindow
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, gio, Application, CssProvider};
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::layout::stylesheet;
use crate::core::{ElementSpec, MainWindow, Parent};
use crate::ui::actions::build_actions;
use crate::ui::components::{GtkContainer, RootWindow};

/// GTK application identifier
pub const APPLICATION_ID: &str = "io.github.smdb-view";

/// Flags for the GTK application
///
/// Every process owns its own window and standard output, so the
/// application never registers as a single instance on the session bus.
pub fn application_flags() -> gio::ApplicationFlags {
    gio::ApplicationFlags::NON_UNIQUE
}

/// Application state owned by the entry point
#[derive(Default)]
pub struct AppState {
    /// The main window, once the application has activated
    main_window: RefCell<Option<MainWindow<GtkContainer>>>,
}

impl AppState {
    /// Whether a main window exists and is still running
    pub fn is_running(&self) -> bool {
        use crate::core::Window;

        self.main_window
            .borrow()
            .as_ref()
            .is_some_and(|window| window.is_alive())
    }
}

/// GTK4 Application hosting the main window
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// Shared application state
    state: Rc<AppState>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new App
    ///
    /// # Example
    ///
    /// ```no_run
    /// use smdb_view::ui::App;
    ///
    /// let app = App::new();
    /// app.run(); // Blocks until window closes
    /// ```
    pub fn new() -> Self {
        let app = Application::builder()
            .application_id(APPLICATION_ID)
            .flags(application_flags())
            .build();

        Self {
            app,
            state: Rc::new(AppState::default()),
        }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the main window is
    /// destroyed. Process arguments are not forwarded to GTK.
    pub fn run(self) -> glib::ExitCode {
        let state = self.state.clone();

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            Self::build_ui(app, state.clone());
        });

        let code = self.app.run_with_args::<&str>(&[]);
        eprintln!("👋 Main loop exited (running: {})", self.state.is_running());
        code
    }

    /// Loads the element stylesheet
    ///
    /// Applies the CSS generated from the element specs to the default
    /// display at APPLICATION priority level.
    fn load_css() {
        let css = stylesheet(&[ElementSpec::greeting(), ElementSpec::quit()]);

        let Some(display) = gdk::Display::default() else {
            eprintln!("⚠️  No default display; skipping stylesheet");
            return;
        };

        let provider = CssProvider::new();
        provider.load_from_string(&css);

        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window UI
    ///
    /// This is called once, when the application activates.
    fn build_ui(app: &Application, state: Rc<AppState>) {
        Self::load_css();

        let root = RootWindow::new(app);
        let actions = build_actions(&root);

        let parent: &dyn Parent<GtkContainer> = &root;
        let main_window = MainWindow::new(Some(parent), GtkContainer::new(), actions);

        let state_for_close = state.clone();
        root.connect_close_request(move || {
            if let Some(window) = state_for_close.main_window.borrow().as_ref() {
                window.host_closed();
            }
        });

        *state.main_window.borrow_mut() = Some(main_window);

        root.present();
    }
}
