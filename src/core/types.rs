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

//! src/core/types.rs
//!
//! Core type definitions for the main window
//!
//! This module defines the fundamental types shared by the model and the view:
//! - `Side`: Pack anchor for an element (top or bottom edge)
//! - `Rgb`: Foreground colour of an element
//! - `ElementKind`: Which action an element dispatches
//! - `ElementSpec`: Complete description of one interactive element
//! - `Lifecycle`: Running/Terminated state of the window

use std::fmt;

/// Label of the greeting element, also the exact line written by Greet
pub const GREETING: &str = "hello, world";

/// Label of the quit element
pub const QUIT_LABEL: &str = "Quit";

/// Pack anchor
///
/// Elements anchored `Top` stack downward from the top edge in pack order,
/// elements anchored `Bottom` stack upward from the bottom edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    Top,
    Bottom,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Top => write!(f, "top"),
            Side::Bottom => write!(f, "bottom"),
        }
    }
}

/// 24-bit foreground colour
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// The named colour `darkred`
    pub const DARK_RED: Rgb = Rgb::new(0x8b, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Renders the colour as a lowercase CSS hex literal (`#rrggbb`)
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

/// Action dispatched when an element is activated
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ElementKind {
    /// Writes the greeting line to standard output
    Greet,
    /// Destroys the top-level window
    Quit,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Greet => write!(f, "greet"),
            ElementKind::Quit => write!(f, "quit"),
        }
    }
}

/// Description of one interactive element
///
/// The view turns each spec into a concrete widget; the model only ever
/// deals with specs, which keeps it testable without a display server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElementSpec {
    /// Action bound to the element
    pub kind: ElementKind,
    /// Visible label
    pub label: String,
    /// Pack anchor
    pub side: Side,
    /// Foreground override (`None` = toolkit default)
    pub foreground: Option<Rgb>,
    /// CSS class attached to the widget, if any
    pub style_class: Option<&'static str>,
}

impl ElementSpec {
    /// The greeting element: `hello, world`, packed at the top
    pub fn greeting() -> Self {
        Self {
            kind: ElementKind::Greet,
            label: GREETING.to_string(),
            side: Side::Top,
            foreground: None,
            style_class: None,
        }
    }

    /// The quit element: `Quit` in dark red, packed at the bottom
    pub fn quit() -> Self {
        Self {
            kind: ElementKind::Quit,
            label: QUIT_LABEL.to_string(),
            side: Side::Bottom,
            foreground: Some(Rgb::DARK_RED),
            style_class: Some("quit-button"),
        }
    }
}

impl fmt::Display for ElementSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] \"{}\" ({})", self.kind, self.label, self.side)?;
        if let Some(colour) = self.foreground {
            write!(f, " fg={}", colour)?;
        }
        Ok(())
    }
}

/// Window lifecycle
///
/// `Running` is entered at construction. `Terminated` is terminal and is
/// entered only through the Quit action or a host-initiated close.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Lifecycle {
    #[default]
    Running,
    Terminated,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifecycle::Running => write!(f, "running"),
            Lifecycle::Terminated => write!(f, "terminated"),
        }
    }
}
