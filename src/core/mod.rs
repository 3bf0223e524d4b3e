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

//! src/core/mod.rs
//!
//! Core window model
//!
//! This module contains the display-independent parts of the application:
//! - Element descriptions (labels, pack sides, foreground colour)
//! - The `Container` abstraction and an in-memory pack layout
//! - The `MainWindow` component and its Running/Terminated lifecycle
//! - The `Greeter` that writes the greeting line
//!
//! Nothing here touches GTK, so every behaviour of the window can be unit
//! tested without a display server.

pub mod error;
pub mod greeter;
pub mod layout;
pub mod types;
pub mod window;

pub use error::{LayoutError, WindowError};
pub use greeter::Greeter;
pub use layout::{Activation, Container, HeadlessRoot, PackedLayout, Parent};
pub use types::*;
pub use window::{Actions, MainWindow, Window};

#[cfg(test)]
mod tests;
