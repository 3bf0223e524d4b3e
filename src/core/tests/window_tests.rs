//! Main window tests
//!
//! Drives `MainWindow` through an in-memory layout: construction invariants,
//! Greet idempotence and isolation, Quit terminality, and the two end-to-end
//! scenarios (greet twice then quit; quit immediately).

use std::cell::Cell;
use std::rc::Rc;

use super::{BrokenPipe, SharedBuffer};
use crate::core::error::WindowError;
use crate::core::greeter::Greeter;
use crate::core::layout::{Container, HeadlessRoot, PackedLayout, Parent};
use crate::core::types::{ElementKind, Lifecycle, Rgb, Side};
use crate::core::window::{describe_activation, Actions, MainWindow, Window};

/// Helper: window attached to a headless root, greeting into a shared buffer
fn build_window() -> (MainWindow<PackedLayout>, Rc<HeadlessRoot>, SharedBuffer) {
    let root = Rc::new(HeadlessRoot::new());
    let stdout = SharedBuffer::default();

    let root_for_quit = root.clone();
    let actions = Actions::with_greeter(Greeter::new(stdout.clone()), move || {
        root_for_quit.destroy()
    });

    let parent: &dyn Parent<PackedLayout> = &*root;
    let window = MainWindow::new(Some(parent), PackedLayout::new(), actions);

    (window, root, stdout)
}

#[test]
fn test_construction_packs_exactly_two_elements() {
    let (window, root, stdout) = build_window();
    let children = window.children();

    assert_eq!(children.len(), 2);
    assert_eq!(children[0].label, "hello, world");
    assert_eq!(children[0].side, Side::Top);
    assert_eq!(children[1].label, "Quit");
    assert_eq!(children[1].side, Side::Bottom);
    assert_eq!(children[1].foreground, Some(Rgb::DARK_RED));

    assert_eq!(root.adopted(), 1, "Window registers with its parent");
    assert!(window.container().is_visible());
    assert_eq!(window.state(), Lifecycle::Running);
    assert!(stdout.contents().is_empty(), "Construction writes nothing");
}

#[test]
fn test_construction_without_parent() {
    let window = MainWindow::new(None, PackedLayout::new(), Actions::new(|| Ok(()), || {}));

    assert_eq!(window.children().len(), 2);
    assert!(window.is_alive());
}

#[test]
fn test_greet_idempotence() {
    let (window, _root, stdout) = build_window();

    for _ in 0..7 {
        window.greet().unwrap();
    }

    assert_eq!(stdout.contents(), "hello, world\n".repeat(7));
}

#[test]
fn test_greet_does_not_change_window() {
    let (window, root, _stdout) = build_window();
    let before = window.children();

    window.greet().unwrap();
    window.greet().unwrap();

    assert_eq!(window.children(), before);
    assert!(window.is_alive());
    assert!(!root.is_destroyed());

    // Quit is still available afterwards
    window.quit().unwrap();
    assert!(root.is_destroyed());
}

#[test]
fn test_greet_output_failure() {
    let window = MainWindow::new(
        None,
        PackedLayout::new(),
        Actions::with_greeter(Greeter::new(BrokenPipe), || {}),
    );

    assert!(matches!(window.greet(), Err(WindowError::Output(_))));
    assert!(window.is_alive(), "A failed write leaves the window running");
}

#[test]
fn test_quit_terminality() {
    let (window, root, stdout) = build_window();

    window.quit().unwrap();

    assert_eq!(window.state(), Lifecycle::Terminated);
    assert!(root.is_destroyed());
    assert!(matches!(window.greet(), Err(WindowError::Terminated)));
    assert!(matches!(window.quit(), Err(WindowError::Terminated)));
    assert!(stdout.contents().is_empty());
}

#[test]
fn test_quit_handler_runs_once() {
    let calls = Rc::new(Cell::new(0));
    let calls_clone = calls.clone();

    let window = MainWindow::new(
        None,
        PackedLayout::new(),
        Actions::new(|| Ok(()), move || calls_clone.set(calls_clone.get() + 1)),
    );

    window.destroy();
    window.destroy();
    let _ = window.quit();

    assert_eq!(calls.get(), 1);
    assert!(!window.is_alive());
}

#[test]
fn test_host_close_skips_quit_handler() {
    let (window, root, _stdout) = build_window();

    window.host_closed();

    assert_eq!(window.state(), Lifecycle::Terminated);
    assert!(!root.is_destroyed(), "Host already tore the window down");
    assert!(matches!(window.quit(), Err(WindowError::Terminated)));
}

#[test]
fn test_activation_after_quit_is_ignored() {
    let (window, _root, stdout) = build_window();

    window.container().activate_label("Quit").unwrap();
    window.container().activate_label("hello, world").unwrap();
    window.container().activate_label("Quit").unwrap();

    assert!(stdout.contents().is_empty());
    assert!(!window.is_alive());
}

#[test]
fn test_scenario_greet_twice_then_quit() {
    let (window, root, stdout) = build_window();

    window.container().activate_label("hello, world").unwrap();
    window.container().activate_label("hello, world").unwrap();
    window.container().activate_label("Quit").unwrap();

    assert_eq!(stdout.contents(), "hello, world\nhello, world\n");
    assert!(root.is_destroyed());
    assert_eq!(window.state(), Lifecycle::Terminated);
}

#[test]
fn test_scenario_quit_immediately() {
    let (window, root, stdout) = build_window();

    window.container().activate(1).unwrap();

    assert_eq!(stdout.contents(), "");
    assert!(root.is_destroyed());
    assert_eq!(window.state(), Lifecycle::Terminated);
}

#[test]
fn test_activation_diagnostics_stay_off_greeting_stream() {
    let (window, _root, stdout) = build_window();

    window.container().activate_label("hello, world").unwrap();
    window.container().activate_label("hello, world").unwrap();
    window.container().activate_label("Quit").unwrap();
    window.container().activate_label("hello, world").unwrap();

    // Only greetings reach the output stream, even when activations are reported
    assert_eq!(stdout.contents(), "hello, world\nhello, world\n");
}

#[test]
fn test_describe_activation() {
    assert_eq!(describe_activation(ElementKind::Greet, &Ok(())), "👆 greet activated");
    assert_eq!(
        describe_activation(ElementKind::Quit, &Err(WindowError::Terminated)),
        "🚫 quit ignored: window terminated"
    );

    let failure = Err(WindowError::Output(std::io::Error::new(
        std::io::ErrorKind::BrokenPipe,
        "pipe closed",
    )));
    assert_eq!(
        describe_activation(ElementKind::Greet, &failure),
        "❌ greet failed: Failed to write greeting: pipe closed"
    );
}
