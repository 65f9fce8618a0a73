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

use crate::{NegotiationCommand, consts};
use bytes::{Bytes, BytesMut};

/// Replies accumulated while scanning one inbound chunk.
///
/// The queue keeps whole commands and an explicit count, so flushing never
/// depends on the byte content of a reply. It is written as a single
/// transmission once the chunk is exhausted, then cleared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplyQueue {
    commands: Vec<NegotiationCommand>,
}

impl ReplyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        ReplyQueue::default()
    }

    /// Creates an empty queue sized for a chunk of `chunk_size` bytes.
    pub fn with_chunk_capacity(chunk_size: usize) -> Self {
        ReplyQueue {
            commands: Vec::with_capacity(chunk_size / consts::COMMAND_LEN + 1),
        }
    }

    /// Appends a reply.
    pub fn push(&mut self, command: NegotiationCommand) {
        self.commands.push(command);
    }

    /// Number of queued replies.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// `true` when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Queued replies in parse order.
    pub fn iter(&self) -> impl Iterator<Item = &NegotiationCommand> {
        self.commands.iter()
    }

    /// All queued replies as one contiguous wire block.
    pub fn to_bytes(&self) -> Bytes {
        let mut buffer = BytesMut::with_capacity(self.commands.len() * consts::COMMAND_LEN);
        for command in &self.commands {
            command.write_to(&mut buffer);
        }
        buffer.freeze()
    }

    /// Drops every queued reply.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::ReplyQueue;
    use crate::{NegotiationCommand, TelnetOption, Verb};

    #[test]
    fn flushes_in_push_order() {
        let mut queue = ReplyQueue::new();
        assert!(queue.is_empty());
        queue.push(NegotiationCommand::new(Verb::Wont, TelnetOption::Echo));
        queue.push(NegotiationCommand::new(Verb::Do, TelnetOption::SuppressGoAhead));
        assert_eq!(queue.len(), 2);
        assert_eq!(&queue.to_bytes()[..], &[0xFF, 0xFC, 0x01, 0xFF, 0xFD, 0x03]);
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.to_bytes().is_empty());
    }

    #[test]
    fn zero_option_is_not_a_terminator() {
        let mut queue = ReplyQueue::new();
        queue.push(NegotiationCommand::new(Verb::Dont, TelnetOption::TransmitBinary));
        queue.push(NegotiationCommand::new(Verb::Wont, TelnetOption::Echo));
        assert_eq!(&queue.to_bytes()[..], &[0xFF, 0xFE, 0x00, 0xFF, 0xFC, 0x01]);
    }
}
