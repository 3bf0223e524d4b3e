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

//! smdb-view
//!
//! A minimal GTK4 desktop window with two buttons: `hello, world`, which
//! prints a greeting line to standard output, and `Quit`, which closes the
//! window and ends the process.
//!
//! # Architecture
//!
//! - **`core`:** Display-independent window model (element specs, container
//!   abstraction, lifecycle, greeting output)
//! - **`ui`:** GTK4 widgets implementing the core traits, plus application setup
//!
//! # Examples
//!
//! ## Driving the window without a display
//!
//! ```
//! use smdb_view::core::{Actions, Greeter, MainWindow, PackedLayout};
//!
//! let window = MainWindow::new(
//!     None,
//!     PackedLayout::new(),
//!     Actions::with_greeter(Greeter::new(Vec::new()), || {}),
//! );
//!
//! window.container().activate_label("hello, world")?;
//! window.container().activate_label("Quit")?;
//! assert!(window.greet().is_err());
//! # Ok::<(), smdb_view::core::LayoutError>(())
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use smdb_view::ui::App;
//!
//! gtk4::init()?;
//! App::new().run(); // Blocks until window closes
//! # Ok::<(), glib::BoolError>(())
//! ```

pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use self::core::{Actions, ElementSpec, Lifecycle, MainWindow, Window};
