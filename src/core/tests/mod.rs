//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Type tests (Side, Rgb, ElementSpec)
//! - Layout tests (pack order, activation, stylesheet)
//! - Greeter tests
//! - Main window lifecycle and end-to-end scenarios

#[cfg(test)]
mod window_tests;

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Shared in-memory output stream standing in for stdout
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Output stream that rejects every write
pub(crate) struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
