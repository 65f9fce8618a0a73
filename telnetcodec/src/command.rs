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

use crate::{TelnetOption, consts};
use bytes::BufMut;

/// One of the four negotiation verbs that may follow `IAC`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `WILL` (offer): sender wants to begin performing an option.
    Will,
    /// `WONT` (refuse): sender will not perform an option.
    Wont,
    /// `DO` (request): sender asks the receiver to perform an option.
    Do,
    /// `DONT` (prohibit): sender asks the receiver to stop performing an option.
    Dont,
}

impl Verb {
    /// All verbs, in wire order.
    pub const ALL: [Verb; 4] = [Verb::Will, Verb::Wont, Verb::Do, Verb::Dont];

    /// Wire value of this verb.
    pub fn to_u8(self) -> u8 {
        match self {
            Verb::Will => consts::WILL,
            Verb::Wont => consts::WONT,
            Verb::Do => consts::DO,
            Verb::Dont => consts::DONT,
        }
    }

    /// Parses a verb byte. Anything outside `WILL..=DONT` yields `None`.
    pub fn from_u8(byte: u8) -> Option<Verb> {
        match byte {
            consts::WILL => Some(Verb::Will),
            consts::WONT => Some(Verb::Wont),
            consts::DO => Some(Verb::Do),
            consts::DONT => Some(Verb::Dont),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Verb::Will => "WILL",
            Verb::Wont => "WONT",
            Verb::Do => "DO",
            Verb::Dont => "DONT",
        })
    }
}

/// A complete `IAC <verb> <option>` sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NegotiationCommand {
    /// Negotiation verb
    pub verb: Verb,
    /// Option the verb applies to
    pub option: TelnetOption,
}

impl NegotiationCommand {
    /// Creates a command for `verb` on `option`.
    pub fn new(verb: Verb, option: impl Into<TelnetOption>) -> Self {
        NegotiationCommand {
            verb,
            option: option.into(),
        }
    }

    /// The three wire bytes of this command.
    pub fn to_bytes(&self) -> [u8; consts::COMMAND_LEN] {
        [consts::IAC, self.verb.to_u8(), self.option.to_u8()]
    }

    /// Appends the wire bytes of this command to `dst`.
    pub fn write_to<B: BufMut>(&self, dst: &mut B) {
        dst.put_slice(&self.to_bytes());
    }
}

impl std::fmt::Display for NegotiationCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IAC {} {}", self.verb, self.option)
    }
}

#[cfg(test)]
mod tests {
    use super::{NegotiationCommand, Verb};
    use crate::TelnetOption;

    #[test]
    fn verb_bytes() {
        assert_eq!(Verb::Will.to_u8(), 0xFB);
        assert_eq!(Verb::Wont.to_u8(), 0xFC);
        assert_eq!(Verb::Do.to_u8(), 0xFD);
        assert_eq!(Verb::Dont.to_u8(), 0xFE);
        for verb in Verb::ALL {
            assert_eq!(Verb::from_u8(verb.to_u8()), Some(verb));
        }
    }

    #[test]
    fn non_verbs_are_rejected() {
        for byte in (0..=0xFAu8).chain(std::iter::once(0xFF)) {
            assert_eq!(Verb::from_u8(byte), None, "byte {:#04X}", byte);
        }
    }

    #[test]
    fn command_wire_shape() {
        let command = NegotiationCommand::new(Verb::Do, TelnetOption::Echo);
        assert_eq!(command.to_bytes(), [0xFF, 0xFD, 0x01]);
        assert_eq!(command.to_string(), "IAC DO Echo");
    }
}
