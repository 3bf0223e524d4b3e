use std::io;
use thiserror::Error;

/// Errors raised by the main window's actions.
#[derive(Debug, Error)]
pub enum WindowError {
    /// The window was already destroyed; the action was not run.
    #[error("Window already terminated")]
    Terminated,
    /// The greeting could not be written to its output stream.
    #[error("Failed to write greeting: {0}")]
    Output(#[from] io::Error),
}

/// Errors raised when dispatching into a layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// No packed element matches the requested index or label.
    #[error("No such element: {0}")]
    NoSuchElement(String),
}
