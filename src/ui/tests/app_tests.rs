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

//! Application setup tests

use gtk4::gio::ApplicationFlags;

use crate::ui::app::application_flags;

#[test]
fn test_application_is_not_single_instance() {
    let flags = application_flags();

    assert!(
        flags.contains(ApplicationFlags::NON_UNIQUE),
        "A second launch must open its own window instead of forwarding to the first"
    );
}

#[test]
fn test_application_does_not_handle_remote_launches() {
    let flags = application_flags();

    assert!(!flags.contains(ApplicationFlags::IS_SERVICE));
    assert!(!flags.contains(ApplicationFlags::IS_LAUNCHER));
    assert!(!flags.contains(ApplicationFlags::HANDLES_COMMAND_LINE));
}
