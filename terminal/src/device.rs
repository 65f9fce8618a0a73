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

//! Terminal devices the raw-mode controller can drive

use crate::{TerminalError, TerminalResult};
use nix::sys::termios::{self, SetArg, Termios};
use std::io::IsTerminal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A terminal whose mode can be read, replaced and derived into raw mode.
pub trait TerminalDevice: Send {
    /// Complete settings of the device, as captured by [`TerminalDevice::get_mode`].
    type Mode: Clone + Send;

    /// Reads the current settings.
    fn get_mode(&mut self) -> TerminalResult<Self::Mode>;

    /// Applies `mode` immediately.
    fn set_mode(&mut self, mode: &Self::Mode) -> TerminalResult<()>;

    /// Derives raw (non-canonical, no echo) settings from `mode`.
    fn raw_mode(&self, mode: &Self::Mode) -> Self::Mode;
}

/// The process's standard input, driven through termios.
#[derive(Debug, Default)]
pub struct StdinTerminal;

impl StdinTerminal {
    /// Creates a handle on standard input.
    pub fn new() -> Self {
        StdinTerminal
    }
}

impl TerminalDevice for StdinTerminal {
    type Mode = Termios;

    fn get_mode(&mut self) -> TerminalResult<Termios> {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            return Err(TerminalError::NotATerminal);
        }
        Ok(termios::tcgetattr(&stdin)?)
    }

    fn set_mode(&mut self, mode: &Termios) -> TerminalResult<()> {
        let stdin = std::io::stdin();
        termios::tcsetattr(&stdin, SetArg::TCSANOW, mode)?;
        Ok(())
    }

    fn raw_mode(&self, mode: &Termios) -> Termios {
        let mut raw = mode.clone();
        termios::cfmakeraw(&mut raw);
        raw
    }
}

/// Settings of a [`MemoryTerminal`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryMode {
    /// Raw mode enabled
    pub raw: bool,
    /// Free-form marker so distinct snapshots can be told apart
    pub tag: u32,
}

#[derive(Debug, Default)]
struct MemoryState {
    current: MemoryMode,
    applied: Vec<MemoryMode>,
    fail_get: bool,
    fail_set: bool,
}

/// In-memory terminal for headless sessions and tests.
///
/// Clones share state, so a clone kept outside a controller observes every
/// mode the controller applies.
#[derive(Clone, Debug, Default)]
pub struct MemoryTerminal {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryTerminal {
    /// Creates a terminal whose current settings are `initial`.
    pub fn new(initial: MemoryMode) -> Self {
        MemoryTerminal {
            state: Arc::new(Mutex::new(MemoryState {
                current: initial,
                ..MemoryState::default()
            })),
        }
    }

    /// Settings currently in effect.
    pub fn current(&self) -> MemoryMode {
        self.lock().current.clone()
    }

    /// Every mode applied through [`TerminalDevice::set_mode`], oldest first.
    pub fn applied(&self) -> Vec<MemoryMode> {
        self.lock().applied.clone()
    }

    /// Makes subsequent [`TerminalDevice::get_mode`] calls fail.
    pub fn fail_get(&self, fail: bool) {
        self.lock().fail_get = fail;
    }

    /// Makes subsequent [`TerminalDevice::set_mode`] calls fail.
    pub fn fail_set(&self, fail: bool) {
        self.lock().fail_set = fail;
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TerminalDevice for MemoryTerminal {
    type Mode = MemoryMode;

    fn get_mode(&mut self) -> TerminalResult<MemoryMode> {
        let state = self.lock();
        if state.fail_get {
            return Err(TerminalError::NotATerminal);
        }
        Ok(state.current.clone())
    }

    fn set_mode(&mut self, mode: &MemoryMode) -> TerminalResult<()> {
        let mut state = self.lock();
        if state.fail_set {
            return Err(TerminalError::Termios(nix::Error::EIO));
        }
        state.current = mode.clone();
        state.applied.push(mode.clone());
        Ok(())
    }

    fn raw_mode(&self, mode: &MemoryMode) -> MemoryMode {
        MemoryMode {
            raw: true,
            ..mode.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_terminal_records_applied_modes() {
        let mut device = MemoryTerminal::new(MemoryMode { raw: false, tag: 7 });
        let observer = device.clone();
        let initial = device.get_mode().unwrap();
        let raw = device.raw_mode(&initial);
        assert_eq!(raw, MemoryMode { raw: true, tag: 7 });

        device.set_mode(&raw).unwrap();
        assert_eq!(observer.current(), raw);
        assert_eq!(observer.applied(), vec![raw]);
    }

    #[test]
    fn memory_terminal_failures() {
        let mut device = MemoryTerminal::default();
        device.fail_get(true);
        assert!(matches!(device.get_mode(), Err(TerminalError::NotATerminal)));
        device.fail_set(true);
        assert!(device.set_mode(&MemoryMode::default()).is_err());
        assert!(device.applied().is_empty());
    }
}
