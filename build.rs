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

//! Build script for smdb-view
//!
//! Checks that the GTK4 development libraries are present before the
//! `gtk4-sys` build fails with a less helpful message.
//!
//! # System Requirements
//!
//! - **Arch Linux:** `sudo pacman -S gtk4`
//! - **Debian/Ubuntu:** `sudo apt install libgtk-4-dev`
//! - **Fedora:** `sudo dnf install gtk4-devel`

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if let Err(e) = pkg_config::Config::new()
        .atleast_version("4.12")
        .cargo_metadata(false)
        .probe("gtk4")
    {
        println!("cargo:warning=GTK4 >= 4.12 not found via pkg-config: {}", e);
        println!("cargo:warning=Install the GTK4 development package for your distribution");
    }
}
