//! UI module tests
//!
//! Only covers setup that does not need a display server or the GTK
//! main thread.

#[cfg(test)]
mod app_tests;
