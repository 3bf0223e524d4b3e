//! UI Components
//!
//! GTK4 widgets backing the core window model.
//!
//! # Components
//!
//! - `gtk_container.rs` - `Container` implementation over a GTK box
//! - `root_window.rs` - Top-level window handle (the container's parent)

mod gtk_container;
mod root_window;

pub use gtk_container::GtkContainer;
pub use root_window::RootWindow;
