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

//! src/core/greeter.rs
//!
//! The Greet action's output side.

use std::io::{self, Stdout, Write};

use crate::core::types::GREETING;

/// Writes the greeting line to an output stream
///
/// Each call to [`Greeter::greet`] emits exactly `hello, world` followed by a
/// newline and flushes, so lines appear immediately even when standard
/// output is a pipe.
pub struct Greeter<W: Write> {
    out: W,
}

impl Greeter<Stdout> {
    /// Greeter bound to the process standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Greeter<W> {
    /// Creates a greeter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes one greeting line
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the stream rejects the write.
    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", GREETING)?;
        self.out.flush()
    }

    /// Consumes the greeter, returning the underlying stream
    pub fn into_inner(self) -> W {
        self.out
    }
}
