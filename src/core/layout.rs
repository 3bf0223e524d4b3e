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

//! src/core/layout.rs
//!
//! Container abstraction and the in-memory pack layout
//!
//! The window does not inherit layout behaviour from a toolkit widget; it
//! holds a `Container` and delegates packing to it. Two implementations exist:
//! - `PackedLayout` (this module): pure data, used by headless hosts and tests
//! - `GtkContainer` (in `ui::components`): real GTK4 widgets

use std::cell::Cell;
use std::fmt::Write as _;
use std::rc::Rc;

use crate::core::error::LayoutError;
use crate::core::types::{ElementSpec, Side};

/// Callback the host invokes when an element is activated
pub type Activation = Rc<dyn Fn()>;

/// Something that can hold interactive elements and lay them out
pub trait Container {
    /// Adds an element at its anchor side and binds its activation
    fn pack(&mut self, element: ElementSpec, on_activate: Activation);

    /// Returns the packed elements in pack order
    fn children(&self) -> Vec<ElementSpec>;

    /// Makes the container visible within its parent
    fn show(&self);

    /// Whether `show` has taken effect
    fn is_visible(&self) -> bool;
}

/// A parent that can register a container as its child
pub trait Parent<C: Container> {
    fn adopt(&self, child: &C);
}

/// In-memory container with Tk-style pack semantics
#[derive(Default)]
pub struct PackedLayout {
    children: Vec<(ElementSpec, Activation)>,
    visible: Cell<bool>,
}

impl PackedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the elements in visual order, top edge first
    ///
    /// `Top` elements come first in pack order; `Bottom` elements follow in
    /// reverse pack order, since each one is placed above the previous.
    pub fn visual_order(&self) -> Vec<&ElementSpec> {
        let top = self
            .children
            .iter()
            .filter(|(spec, _)| spec.side == Side::Top)
            .map(|(spec, _)| spec);
        let bottom = self
            .children
            .iter()
            .rev()
            .filter(|(spec, _)| spec.side == Side::Bottom)
            .map(|(spec, _)| spec);

        top.chain(bottom).collect()
    }

    /// Simulates the host activating the element at `index` (pack order)
    pub fn activate(&self, index: usize) -> Result<(), LayoutError> {
        let activation = self
            .children
            .get(index)
            .map(|(_, activation)| activation.clone())
            .ok_or_else(|| LayoutError::NoSuchElement(format!("#{}", index)))?;

        activation();
        Ok(())
    }

    /// Simulates the host activating the first element labelled `label`
    pub fn activate_label(&self, label: &str) -> Result<(), LayoutError> {
        let activation = self
            .children
            .iter()
            .find(|(spec, _)| spec.label == label)
            .map(|(_, activation)| activation.clone())
            .ok_or_else(|| LayoutError::NoSuchElement(label.to_string()))?;

        activation();
        Ok(())
    }
}

impl Container for PackedLayout {
    fn pack(&mut self, element: ElementSpec, on_activate: Activation) {
        self.children.push((element, on_activate));
    }

    fn children(&self) -> Vec<ElementSpec> {
        self.children.iter().map(|(spec, _)| spec.clone()).collect()
    }

    fn show(&self) {
        self.visible.set(true);
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

/// Root window stand-in for hosts without a display
///
/// Records adoption and destruction so callers can observe the window's
/// lifetime without a windowing system.
#[derive(Debug, Default)]
pub struct HeadlessRoot {
    adopted: Cell<usize>,
    destroyed: Cell<bool>,
}

impl HeadlessRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of containers adopted so far
    pub fn adopted(&self) -> usize {
        self.adopted.get()
    }

    pub fn destroy(&self) {
        self.destroyed.set(true);
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }
}

impl<C: Container> Parent<C> for HeadlessRoot {
    fn adopt(&self, _child: &C) {
        self.adopted.set(self.adopted.get() + 1);
    }
}

/// Builds CSS rules for every element with a foreground colour
///
/// Elements without a style class cannot be targeted and are skipped.
///
/// # Example
///
/// ```
/// use smdb_view::core::{layout::stylesheet, ElementSpec};
///
/// let css = stylesheet(&[ElementSpec::greeting(), ElementSpec::quit()]);
/// assert_eq!(css, "button.quit-button { color: #8b0000; }\n");
/// ```
pub fn stylesheet(elements: &[ElementSpec]) -> String {
    let mut css = String::new();

    for element in elements {
        if let (Some(colour), Some(class)) = (element.foreground, element.style_class) {
            // Writing into a String cannot fail
            let _ = writeln!(css, "button.{} {{ color: {}; }}", class, colour.to_css());
        }
    }

    css
}
