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

use crate::NegotiationCommand;
use bytes::Bytes;

/// Output of one [`NegotiationCodec`](crate::NegotiationCodec) decode step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NegotiationEvent {
    /// A run of data bytes to hand to the terminal unchanged.
    Data(Bytes),
    /// Reply the policy produced for a completed command. Carries the
    /// outbound command, not the one received.
    Reply(NegotiationCommand),
    /// A completed command the policy chose not to answer. Carries the
    /// inbound command.
    Ignored(NegotiationCommand),
}
