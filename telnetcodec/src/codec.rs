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

use crate::policy::{NegotiationPolicy, Reciprocating};
use crate::{
    NegotiationCommand, NegotiationEvent, ProtocolError, ReplyQueue, TelnetOption, Verb, consts,
};
use bytes::{Buf, Bytes, BytesMut};
use tokio_util::codec::Decoder;
use tracing::{debug, trace};

/// Position of the decoder inside a command sequence.
///
/// The pending verb only exists while the option byte is outstanding, so it is
/// carried by the `AwaitingOption` variant itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NegotiationState {
    /// Passing data through.
    #[default]
    Idle,
    /// Saw `IAC`, the next byte must be a verb.
    AwaitingVerb,
    /// Saw `IAC <verb>`, the next byte is the option identifier.
    AwaitingOption(Verb),
}

/// Everything produced by one inbound chunk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessedChunk {
    /// Data bytes, in arrival order, with every command sequence removed.
    pub data: Bytes,
    /// Replies to send back as a single write.
    pub replies: ReplyQueue,
    /// Commands that completed without a reply.
    pub ignored: Vec<NegotiationCommand>,
}

/// Splits an inbound Telnet byte stream into data and negotiation commands and
/// answers each command through a [`NegotiationPolicy`].
///
/// State survives between [`Decoder::decode`] calls, so a sequence split across
/// reads is still recognised as one command. After a [`ProtocolError`] the codec
/// is back in [`NegotiationState::Idle`], but the stream it was reading should
/// be abandoned.
pub struct NegotiationCodec<P = Box<dyn NegotiationPolicy>> {
    state: NegotiationState,
    policy: P,
}

impl NegotiationCodec<Reciprocating> {
    /// Creates a codec using the [`Reciprocating`] policy.
    ///
    /// # Example
    /// ```
    /// use rawtel_telnetcodec::{NegotiationCodec, NegotiationState};
    ///
    /// let codec = NegotiationCodec::new();
    /// assert_eq!(codec.state(), NegotiationState::Idle);
    /// ```
    pub fn new() -> Self {
        NegotiationCodec::with_policy(Reciprocating)
    }
}

impl Default for NegotiationCodec<Reciprocating> {
    fn default() -> Self {
        NegotiationCodec::new()
    }
}

impl<P: NegotiationPolicy> NegotiationCodec<P> {
    /// Creates a codec answering with `policy`.
    pub fn with_policy(policy: P) -> Self {
        NegotiationCodec {
            state: NegotiationState::Idle,
            policy,
        }
    }

    /// Current parser state.
    pub fn state(&self) -> NegotiationState {
        self.state
    }

    /// The policy replies are derived from.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Scans one inbound chunk completely.
    ///
    /// Data bytes are collected in order and every reply is queued in the order
    /// its command was parsed. A trailing partial sequence stays pending in the
    /// codec for the next chunk.
    ///
    /// # Example
    /// ```
    /// use rawtel_telnetcodec::NegotiationCodec;
    ///
    /// let mut codec = NegotiationCodec::new();
    /// let chunk = codec.process_chunk(b"hi\xFF\xFD\x01").unwrap();
    /// assert_eq!(&chunk.data[..], b"hi");
    /// assert_eq!(&chunk.replies.to_bytes()[..], &[0xFF, 0xFC, 0x01]);
    /// ```
    pub fn process_chunk(&mut self, chunk: &[u8]) -> Result<ProcessedChunk, ProtocolError> {
        let mut src = BytesMut::from(chunk);
        let mut data = BytesMut::with_capacity(chunk.len());
        let mut processed = ProcessedChunk {
            replies: ReplyQueue::with_chunk_capacity(chunk.len()),
            ..ProcessedChunk::default()
        };
        while let Some(event) = self.decode(&mut src)? {
            match event {
                NegotiationEvent::Data(bytes) => data.extend_from_slice(&bytes),
                NegotiationEvent::Reply(reply) => processed.replies.push(reply),
                NegotiationEvent::Ignored(command) => processed.ignored.push(command),
            }
        }
        processed.data = data.freeze();
        Ok(processed)
    }

    fn complete(&self, verb: Verb, option: u8) -> NegotiationEvent {
        let received = NegotiationCommand::new(verb, TelnetOption::from(option));
        if self.policy.suppress(verb, received.option) {
            debug!("received {}, not answering", received);
            return NegotiationEvent::Ignored(received);
        }
        let reply = NegotiationCommand::new(self.policy.respond(verb), received.option);
        debug!("received {}, replying {}", received, reply);
        NegotiationEvent::Reply(reply)
    }
}

impl<P: NegotiationPolicy> Decoder for NegotiationCodec<P> {
    type Item = NegotiationEvent;
    type Error = ProtocolError;

    /// Consumes bytes from `src` until one event is available.
    ///
    /// Returns `Ok(None)` once `src` is empty, whether or not a command is
    /// still pending.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        while !src.is_empty() {
            match self.state {
                NegotiationState::Idle => {
                    let run = src
                        .iter()
                        .position(|&byte| byte == consts::IAC)
                        .unwrap_or(src.len());
                    if run > 0 {
                        return Ok(Some(NegotiationEvent::Data(src.split_to(run).freeze())));
                    }
                    src.advance(1);
                    self.state = NegotiationState::AwaitingVerb;
                }
                NegotiationState::AwaitingVerb => {
                    let byte = src.get_u8();
                    match Verb::from_u8(byte) {
                        Some(verb) => {
                            trace!("IAC {}", verb);
                            self.state = NegotiationState::AwaitingOption(verb);
                        }
                        None => {
                            self.state = NegotiationState::Idle;
                            return Err(ProtocolError::UnexpectedVerb(byte));
                        }
                    }
                }
                NegotiationState::AwaitingOption(verb) => {
                    let option = src.get_u8();
                    self.state = NegotiationState::Idle;
                    return Ok(Some(self.complete(verb, option)));
                }
            }
        }
        Ok(None)
    }
}
