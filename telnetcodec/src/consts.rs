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

//! Reserved Telnet byte values (RFC 854, RFC 855)

/// Interpret As Command
pub const IAC: u8 = 255;
/// Refuse to perform, or continue performing, the indicated option.
pub const DONT: u8 = 254;
/// Request that the other party perform the indicated option.
pub const DO: u8 = 253;
/// Refuse to perform, or continue performing, the option.
pub const WONT: u8 = 252;
/// Offer to begin performing the indicated option.
pub const WILL: u8 = 251;

/// Length of a negotiation sequence on the wire: `IAC <verb> <option>`.
pub const COMMAND_LEN: usize = 3;

/// Well-known option identifiers
pub mod option {
    /// Binary Transmission (RFC 856)
    pub const BINARY: u8 = 0;
    /// Echo (RFC 857)
    pub const ECHO: u8 = 1;
    /// Suppress Go Ahead (RFC 858)
    pub const SGA: u8 = 3;
    /// Status (RFC 859)
    pub const STATUS: u8 = 5;
    /// Timing Mark (RFC 860)
    pub const TM: u8 = 6;
    /// Terminal Type (RFC 1091)
    pub const TTYPE: u8 = 24;
    /// End of Record (RFC 885)
    pub const EOR: u8 = 25;
    /// Negotiate About Window Size (RFC 1073)
    pub const NAWS: u8 = 31;
    /// Terminal Speed (RFC 1079)
    pub const TSPEED: u8 = 32;
    /// Remote Flow Control (RFC 1372)
    pub const LFLOW: u8 = 33;
    /// Linemode (RFC 1184)
    pub const LINEMODE: u8 = 34;
    /// X Display Location (RFC 1096)
    pub const XDISPLOC: u8 = 35;
    /// Environment Option (RFC 1408)
    pub const OLD_ENVIRONMENT: u8 = 36;
    /// Authentication (RFC 2941)
    pub const AUTHENTICATION: u8 = 37;
    /// Encryption (RFC 2946)
    pub const ENCRYPTION: u8 = 38;
    /// New Environment Option (RFC 1572)
    pub const NEW_ENVIRONMENT: u8 = 39;
    /// Charset (RFC 2066)
    pub const CHARSET: u8 = 42;
    /// Extended Options List (RFC 861)
    pub const EXOPL: u8 = 255;
}
