//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::{InputMode, TerminalDevice, TerminalResult};
use tracing::{debug, warn};

/// Puts the local terminal into the mode a session needs and puts it back.
///
/// Entering [`InputMode::Character`] captures the device's settings before
/// touching them. That snapshot is restored exactly once: by the first call to
/// [`RawModeController::restore`], or on drop if nobody restored it earlier.
/// Failures are logged and otherwise ignored.
pub struct RawModeController<D: TerminalDevice> {
    device: D,
    input_mode: InputMode,
    snapshot: Option<D::Mode>,
}

impl<D: TerminalDevice> RawModeController<D> {
    /// Wraps `device` without changing it.
    pub fn new(device: D) -> Self {
        RawModeController {
            device,
            input_mode: InputMode::Line,
            snapshot: None,
        }
    }

    /// Switches the device for `mode`.
    ///
    /// [`InputMode::Line`] leaves the terminal alone. [`InputMode::Character`]
    /// saves the current settings and applies raw mode. Entering again while a
    /// snapshot is held keeps the original snapshot.
    pub fn enter(&mut self, mode: InputMode) -> TerminalResult<()> {
        self.input_mode = mode;
        if !mode.is_raw() {
            return Ok(());
        }
        let original = match &self.snapshot {
            Some(original) => original.clone(),
            None => {
                let original = self.device.get_mode()?;
                self.snapshot = Some(original.clone());
                original
            }
        };
        let raw = self.device.raw_mode(&original);
        self.device.set_mode(&raw)?;
        debug!("terminal switched to raw mode");
        Ok(())
    }

    /// Restores the saved settings, if any are held.
    ///
    /// Returns `true` if this call consumed the snapshot, whether or not the
    /// device accepted it. Later calls return `false` and do nothing.
    pub fn restore(&mut self) -> bool {
        let Some(original) = self.snapshot.take() else {
            return false;
        };
        match self.device.set_mode(&original) {
            Ok(()) => debug!("terminal mode restored"),
            Err(error) => warn!("Failed to restore terminal mode: {}", error),
        }
        true
    }

    /// Whether a snapshot is held, i.e. raw mode was entered and not yet undone.
    pub fn is_raw(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Mode requested by the last [`RawModeController::enter`].
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// The saved settings, if held.
    pub fn snapshot(&self) -> Option<&D::Mode> {
        self.snapshot.as_ref()
    }

    /// The wrapped device.
    pub fn device(&self) -> &D {
        &self.device
    }
}

impl<D: TerminalDevice> Drop for RawModeController<D> {
    fn drop(&mut self) {
        self.restore();
    }
}
