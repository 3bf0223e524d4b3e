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

//! GTK4 container for the main window's elements
//!
//! Realises `Container` with a vertical box split into two regions so that
//! pack anchors behave like Tk's `pack(side=...)`. Neither region expands,
//! so the elements stay together at the top when the window grows:
//!
//! ```text
//! GtkBox (vertical)
//!   ├─ top region     (valign start, children appended)
//!   └─ bottom region  (valign end, children prepended)
//! ```

use gtk4::{prelude::*, Align, Box as GtkBox, Button, Orientation};

use crate::core::{Activation, Container, ElementSpec, Side};

/// Container backed by GTK4 widgets
pub struct GtkContainer {
    /// Root widget (added to the parent window)
    widget: GtkBox,
    /// Region for `Side::Top` elements
    top: GtkBox,
    /// Region for `Side::Bottom` elements
    bottom: GtkBox,
    /// Packed element descriptions, in pack order
    children: Vec<ElementSpec>,
}

impl Default for GtkContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl GtkContainer {
    /// Creates an empty, hidden container
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 0);
        widget.set_valign(Align::Start);
        widget.set_halign(Align::Center);

        let top = GtkBox::new(Orientation::Vertical, 0);
        top.set_valign(Align::Start);

        let bottom = GtkBox::new(Orientation::Vertical, 0);
        bottom.set_valign(Align::End);

        widget.append(&top);
        widget.append(&bottom);
        widget.set_visible(false);

        Self {
            widget,
            top,
            bottom,
            children: Vec::new(),
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}

impl Container for GtkContainer {
    fn pack(&mut self, element: ElementSpec, on_activate: Activation) {
        let button = Button::builder().label(element.label.as_str()).build();

        if let Some(class) = element.style_class {
            button.add_css_class(class);
        }

        button.connect_clicked(move |_| on_activate());

        match element.side {
            Side::Top => self.top.append(&button),
            // Each bottom pack sits above the previous one
            Side::Bottom => self.bottom.prepend(&button),
        }

        self.children.push(element);
    }

    fn children(&self) -> Vec<ElementSpec> {
        self.children.clone()
    }

    fn show(&self) {
        self.widget.set_visible(true);
    }

    fn is_visible(&self) -> bool {
        self.widget.is_visible()
    }
}
