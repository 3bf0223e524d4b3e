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

//! src/core/window.rs
//!
//! The main window component
//!
//! `MainWindow` owns a container holding exactly two interactive elements
//! (greeting at the top, quit at the bottom) and the window lifecycle.
//! Both action handlers are injected at construction, so no element is ever
//! observable without its binding.
//!
//! # Lifecycle
//!
//! ```text
//! new() ──> Running ──quit() / host_closed()──> Terminated
//!             │  ▲
//!             └──┘ greet()
//! ```

use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::rc::Rc;

use crate::core::error::WindowError;
use crate::core::greeter::Greeter;
use crate::core::layout::{Container, Parent};
use crate::core::types::{ElementKind, ElementSpec, Lifecycle};

type GreetFn = Box<dyn FnMut() -> io::Result<()>>;
type QuitFn = Box<dyn FnOnce()>;

/// The two action handlers bound to the window's elements
pub struct Actions {
    greet: GreetFn,
    quit: QuitFn,
}

impl Actions {
    /// Creates an action set from a Greet handler and a Quit handler
    ///
    /// The Quit handler runs at most once.
    pub fn new<G, Q>(greet: G, quit: Q) -> Self
    where
        G: FnMut() -> io::Result<()> + 'static,
        Q: FnOnce() + 'static,
    {
        Self {
            greet: Box::new(greet),
            quit: Box::new(quit),
        }
    }

    /// Creates an action set whose Greet handler writes through `greeter`
    pub fn with_greeter<W, Q>(mut greeter: Greeter<W>, quit: Q) -> Self
    where
        W: Write + 'static,
        Q: FnOnce() + 'static,
    {
        Self::new(move || greeter.greet(), quit)
    }
}

/// Minimal window interface
pub trait Window {
    /// Makes the window visible within its parent
    fn show(&self);

    /// Tears the window down
    fn destroy(&self);

    /// Whether the window still exists
    fn is_alive(&self) -> bool;
}

/// Lifecycle state and handlers, shared with the element activations
struct Dispatch {
    state: Cell<Lifecycle>,
    greet: RefCell<GreetFn>,
    quit: RefCell<Option<QuitFn>>,
}

impl Dispatch {
    fn greet(&self) -> Result<(), WindowError> {
        if self.state.get() == Lifecycle::Terminated {
            return Err(WindowError::Terminated);
        }

        let mut greet = self.greet.borrow_mut();
        (*greet)()?;
        Ok(())
    }

    fn quit(&self) -> Result<(), WindowError> {
        if self.state.get() == Lifecycle::Terminated {
            return Err(WindowError::Terminated);
        }

        // Enter Terminated before tearing down so re-entrant activations
        // during teardown are rejected
        self.state.set(Lifecycle::Terminated);

        let handler = self.quit.borrow_mut().take();
        if let Some(handler) = handler {
            handler();
        }
        Ok(())
    }

    fn host_closed(&self) {
        self.state.set(Lifecycle::Terminated);
        self.quit.borrow_mut().take();
    }

    fn dispatch(&self, kind: ElementKind) {
        let result = match kind {
            ElementKind::Greet => self.greet(),
            ElementKind::Quit => self.quit(),
        };

        // Standard output carries greetings only; diagnostics go to stderr
        eprintln!("{}", describe_activation(kind, &result));
    }
}

/// Formats the diagnostic line for one element activation
pub(crate) fn describe_activation(kind: ElementKind, result: &Result<(), WindowError>) -> String {
    match result {
        Ok(()) => format!("👆 {} activated", kind),
        Err(WindowError::Terminated) => format!("🚫 {} ignored: window terminated", kind),
        Err(e) => format!("❌ {} failed: {}", kind, e),
    }
}

/// The application's main window
///
/// Generic over its container so the same component drives real GTK4
/// widgets and the in-memory layout used in tests.
///
/// # Example
///
/// ```
/// use smdb_view::core::{Actions, HeadlessRoot, MainWindow, PackedLayout, Parent};
/// use std::rc::Rc;
///
/// let root = Rc::new(HeadlessRoot::new());
/// let root_for_quit = root.clone();
/// let parent: &dyn Parent<PackedLayout> = &*root;
///
/// let window = MainWindow::new(
///     Some(parent),
///     PackedLayout::new(),
///     Actions::new(|| Ok(()), move || root_for_quit.destroy()),
/// );
///
/// window.quit()?;
/// assert!(root.is_destroyed());
/// # Ok::<(), smdb_view::core::WindowError>(())
/// ```
pub struct MainWindow<C: Container> {
    container: C,
    dispatch: Rc<Dispatch>,
}

impl<C: Container> MainWindow<C> {
    /// Builds the window
    ///
    /// Registers the container with `parent` when one is given, packs the
    /// greeting and quit elements, and shows the container. The window starts
    /// in `Running`.
    pub fn new(parent: Option<&dyn Parent<C>>, mut container: C, actions: Actions) -> Self {
        let dispatch = Rc::new(Dispatch {
            state: Cell::new(Lifecycle::Running),
            greet: RefCell::new(actions.greet),
            quit: RefCell::new(Some(actions.quit)),
        });

        if let Some(parent) = parent {
            parent.adopt(&container);
        }

        Self::assemble(&mut container, &dispatch);
        container.show();

        eprintln!("✅ Main window ready");

        Self { container, dispatch }
    }

    fn assemble(container: &mut C, dispatch: &Rc<Dispatch>) {
        for element in [ElementSpec::greeting(), ElementSpec::quit()] {
            let kind = element.kind;
            let dispatch = dispatch.clone();
            container.pack(element, Rc::new(move || dispatch.dispatch(kind)));
        }
    }

    /// Runs the Greet action
    ///
    /// # Errors
    ///
    /// - `WindowError::Terminated` if the window no longer exists
    /// - `WindowError::Output` if the greeting could not be written
    pub fn greet(&self) -> Result<(), WindowError> {
        self.dispatch.greet()
    }

    /// Runs the Quit action
    ///
    /// Transitions to `Terminated`, then runs the Quit handler. Terminal:
    /// every later action returns `WindowError::Terminated`.
    pub fn quit(&self) -> Result<(), WindowError> {
        self.dispatch.quit()
    }

    /// Records that the host closed the window on its own
    ///
    /// The Quit handler is dropped without running, since the host has
    /// already torn the window down.
    pub fn host_closed(&self) {
        self.dispatch.host_closed();
        eprintln!("🚪 Main window closed by host");
    }

    pub fn state(&self) -> Lifecycle {
        self.dispatch.state.get()
    }

    /// Returns the packed elements in pack order
    pub fn children(&self) -> Vec<ElementSpec> {
        self.container.children()
    }

    pub fn container(&self) -> &C {
        &self.container
    }
}

impl<C: Container> Window for MainWindow<C> {
    fn show(&self) {
        self.container.show();
    }

    fn destroy(&self) {
        if let Err(e) = self.quit() {
            eprintln!("🚫 Destroy ignored: {}", e);
        }
    }

    fn is_alive(&self) -> bool {
        self.state() == Lifecycle::Running
    }
}
