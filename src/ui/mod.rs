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

//! GTK4 user interface with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: MainWindow, element specs, Greeter (in the `core` module)
//! - **View**: GTK4 components (in `components/` submodule)
//! - **Wiring**: App builds the root window and injects the actions
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── app.rs          // GTK4 Application setup
//! ├── actions.rs      // Greet/Quit handlers for the GTK host
//! ├── components/     // GTK widgets implementing core traits
//! └── tests/          // Display-free tests of the GTK host setup
//! ```

mod actions;
pub mod app;
pub mod components;

pub use app::{App, AppState};

#[cfg(test)]
mod tests;
