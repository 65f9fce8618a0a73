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

/// Result Type for negotiation decoding
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors raised while separating commands from data.
///
/// Any of these leaves the byte stream unsynchronized; the connection has to
/// be dropped.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// `IAC` was followed by a byte that is not `WILL`, `WONT`, `DO` or `DONT`.
    #[error("unexpected byte 0x{0:02X} after IAC, expected WILL/WONT/DO/DONT")]
    UnexpectedVerb(u8),

    /// I/O failure surfaced through a framed transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProtocolError {
    /// The offending byte for [`ProtocolError::UnexpectedVerb`].
    pub fn offending_byte(&self) -> Option<u8> {
        match self {
            ProtocolError::UnexpectedVerb(byte) => Some(*byte),
            ProtocolError::Io(_) => None,
        }
    }
}
