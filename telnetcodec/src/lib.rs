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

//! # Rawtel Telnet Negotiation Codec
//!
//! Separates the plain data of an inbound Telnet stream from the option
//! negotiation commands embedded in it, and works out what to answer.
//!
//! ## Wire Format
//!
//! - A data byte is any octet other than `IAC` (0xFF) outside a command.
//! - A command is exactly three octets: `IAC <verb> <option>`, where `verb` is
//!   one of `WILL` (0xFB), `WONT` (0xFC), `DO` (0xFD) or `DONT` (0xFE) and
//!   `option` is any octet.
//! - Replies use the same three octet shape.
//!
//! Any other byte after `IAC` is a [`ProtocolError`]. The stream cannot be
//! resynchronised after that, so the connection must be dropped.
//!
//! ## Core Components
//!
//! ### [`NegotiationCodec`]
//!
//! A three-state machine ([`NegotiationState`]) implementing
//! [`Decoder`](tokio_util::codec::Decoder). It yields [`NegotiationEvent`]s and
//! keeps its state across reads, so commands split over several reads are
//! handled like whole ones.
//!
//! ### [`NegotiationPolicy`]
//!
//! Maps a received verb to the verb sent back. [`Reciprocating`] agrees with the
//! peer's proposals, [`Refusing`] declines everything, and [`IgnoreOptions`]
//! leaves selected options unanswered.
//!
//! ### [`ReplyQueue`]
//!
//! Replies gathered over one inbound chunk and written back as one block.
//!
//! ## Usage Example
//!
//! ```rust
//! use rawtel_telnetcodec::{NegotiationCodec, NegotiationEvent, ReplyQueue};
//! use bytes::BytesMut;
//! use tokio_util::codec::Decoder;
//!
//! # fn main() -> Result<(), rawtel_telnetcodec::ProtocolError> {
//! let mut codec = NegotiationCodec::new();
//! let mut replies = ReplyQueue::new();
//! let mut input = BytesMut::from(&b"Hello\xFF\xFB\x01"[..]); // data + WILL Echo
//!
//! while let Some(event) = codec.decode(&mut input)? {
//!     match event {
//!         NegotiationEvent::Data(bytes) => print!("{}", String::from_utf8_lossy(&bytes)),
//!         NegotiationEvent::Reply(reply) => replies.push(reply),
//!         NegotiationEvent::Ignored(_) => {}
//!     }
//! }
//! assert_eq!(&replies.to_bytes()[..], &[0xFF, 0xFD, 0x01]); // DO Echo
//! # Ok(())
//! # }
//! ```

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod codec;
mod command;
pub mod consts;
mod event;
mod options;
pub mod policy;
mod reply;
mod result;

pub use self::codec::{NegotiationCodec, NegotiationState, ProcessedChunk};
pub use self::command::{NegotiationCommand, Verb};
pub use self::event::NegotiationEvent;
pub use self::options::TelnetOption;
pub use self::policy::{
    IgnoreOptions, NegotiationPolicy, ParsePolicyError, PolicyKind, Reciprocating, Refusing,
};
pub use self::reply::ReplyQueue;
pub use self::result::{ProtocolError, ProtocolResult};

#[cfg(test)]
mod tests {
    use super::{NegotiationCodec, Reciprocating, Refusing, consts};

    #[test]
    fn request_echo_under_both_policies() {
        let input = [consts::IAC, consts::DO, consts::option::ECHO];

        let mut codec = NegotiationCodec::with_policy(Reciprocating);
        let chunk = codec.process_chunk(&input).unwrap();
        assert_eq!(
            &chunk.replies.to_bytes()[..],
            &[consts::IAC, consts::WONT, consts::option::ECHO]
        );

        let mut codec = NegotiationCodec::with_policy(Refusing);
        let chunk = codec.process_chunk(&input).unwrap();
        assert_eq!(
            &chunk.replies.to_bytes()[..],
            &[consts::IAC, consts::WONT, consts::option::ECHO]
        );
    }

    #[test]
    fn offer_differs_between_policies() {
        let input = [consts::IAC, consts::WILL, consts::option::SGA];

        let mut codec = NegotiationCodec::with_policy(Reciprocating);
        let chunk = codec.process_chunk(&input).unwrap();
        assert_eq!(
            &chunk.replies.to_bytes()[..],
            &[consts::IAC, consts::DO, consts::option::SGA]
        );

        let mut codec = NegotiationCodec::with_policy(Refusing);
        let chunk = codec.process_chunk(&input).unwrap();
        assert_eq!(
            &chunk.replies.to_bytes()[..],
            &[consts::IAC, consts::DONT, consts::option::SGA]
        );
    }
}
