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

//! # Rawtel Terminal
//!
//! Local terminal handling for the rawtel client: a [`RawModeController`] that
//! switches a [`TerminalDevice`] into raw mode for character-at-a-time input
//! and guarantees the previous settings come back exactly once.
//!
//! ```no_run
//! use rawtel_terminal::{InputMode, RawModeController, StdinTerminal};
//!
//! let mut controller = RawModeController::new(StdinTerminal::new());
//! if let Err(error) = controller.enter(InputMode::Character) {
//!     eprintln!("staying in line mode: {}", error);
//! }
//! // ... run the session ...
//! controller.restore();
//! ```

mod controller;
mod device;
mod result;
mod types;

pub use self::controller::RawModeController;
pub use self::device::{MemoryMode, MemoryTerminal, StdinTerminal, TerminalDevice};
pub use self::result::{TerminalError, TerminalResult};
pub use self::types::InputMode;
