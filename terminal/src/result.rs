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

/// Result type for the terminal
pub type TerminalResult<T> = Result<T, TerminalError>;

/// Failures reading or changing the local terminal's settings.
///
/// None of these are fatal to a session: the controller reports them and the
/// client carries on with whatever mode the terminal is in.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// I/O error on the terminal device
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    /// `tcgetattr`/`tcsetattr` failed
    #[error("termios error: {0}")]
    Termios(#[from] nix::Error),

    /// Standard input is not attached to a terminal
    #[error("standard input is not a terminal")]
    NotATerminal,
}
