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

use crate::consts::option;

/// Declares [`TelnetOption`] and both directions of its byte mapping from a
/// single `Variant = CODE` table.
macro_rules! telnet_options {
    ($($(#[$meta:meta])* $variant:ident = $code:path,)*) => {
        /// Named view over a Telnet option identifier.
        ///
        /// Options are never interpreted here; the names only make log output
        /// and configuration readable. Every byte maps to exactly one variant
        /// and back, unlisted identifiers are carried as
        /// [`TelnetOption::Unknown`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum TelnetOption {
            $($(#[$meta])* $variant,)*
            /// Any identifier without a name here
            Unknown(u8),
        }

        impl TelnetOption {
            /// Wire value of this option.
            pub fn to_u8(&self) -> u8 {
                match self {
                    $(TelnetOption::$variant => $code,)*
                    TelnetOption::Unknown(byte) => *byte,
                }
            }

            /// Named variant for a wire value, or [`TelnetOption::Unknown`].
            pub fn from_u8(byte: u8) -> Self {
                match byte {
                    $($code => TelnetOption::$variant,)*
                    byte => TelnetOption::Unknown(byte),
                }
            }
        }
    };
}

telnet_options! {
    /// Binary Transmission (RFC 856)
    TransmitBinary = option::BINARY,
    /// Echo (RFC 857)
    Echo = option::ECHO,
    /// Suppress Go Ahead (RFC 858)
    SuppressGoAhead = option::SGA,
    /// Status (RFC 859)
    Status = option::STATUS,
    /// Timing Mark (RFC 860)
    TimingMark = option::TM,
    /// Terminal Type (RFC 1091)
    TTYPE = option::TTYPE,
    /// End of Record (RFC 885)
    EOR = option::EOR,
    /// Negotiate About Window Size (RFC 1073)
    NAWS = option::NAWS,
    /// Terminal Speed (RFC 1079)
    TSPEED = option::TSPEED,
    /// Remote Flow Control (RFC 1372)
    LFLOW = option::LFLOW,
    /// Linemode (RFC 1184)
    Linemode = option::LINEMODE,
    /// X Display Location (RFC 1096)
    XDISPLOC = option::XDISPLOC,
    /// Environment Option (RFC 1408)
    Environment = option::OLD_ENVIRONMENT,
    /// Authentication (RFC 2941)
    Authentication = option::AUTHENTICATION,
    /// Encryption (RFC 2946)
    Encryption = option::ENCRYPTION,
    /// New Environment Option (RFC 1572)
    NewEnvironment = option::NEW_ENVIRONMENT,
    /// Charset (RFC 2066)
    Charset = option::CHARSET,
    /// Extended Options List (RFC 861)
    EXOPL = option::EXOPL,
}

impl std::fmt::Display for TelnetOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelnetOption::Unknown(byte) => write!(f, "Unknown({})", byte),
            other => write!(f, "{:?}", other),
        }
    }
}

impl From<u8> for TelnetOption {
    fn from(byte: u8) -> Self {
        Self::from_u8(byte)
    }
}

impl From<TelnetOption> for u8 {
    fn from(option: TelnetOption) -> Self {
        option.to_u8()
    }
}
