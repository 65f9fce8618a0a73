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

//! Property tests for the negotiation codec

use proptest::prelude::*;
use rawtel_telnetcodec::{
    NegotiationCodec, NegotiationPolicy, NegotiationState, ProtocolError, Reciprocating, Refusing,
    Verb, consts,
};

fn verb() -> impl Strategy<Value = Verb> {
    prop::sample::select(Verb::ALL.to_vec())
}

fn non_iac_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..consts::IAC, 0..512)
}

/// A stream of data runs and well formed commands.
fn well_formed_stream() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            prop::collection::vec(0u8..consts::IAC, 1..16),
            (verb(), any::<u8>())
                .prop_map(|(verb, option)| vec![consts::IAC, verb.to_u8(), option]),
        ],
        0..32,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn data_without_iac_passes_through(data in non_iac_bytes()) {
        let mut codec = NegotiationCodec::new();
        let chunk = codec.process_chunk(&data).unwrap();
        prop_assert_eq!(&chunk.data[..], &data[..]);
        prop_assert!(chunk.replies.is_empty());
        prop_assert_eq!(codec.state(), NegotiationState::Idle);
    }

    #[test]
    fn triple_yields_exactly_one_reply(verb in verb(), option in any::<u8>()) {
        let input = [consts::IAC, verb.to_u8(), option];
        for policy in [&Reciprocating as &dyn NegotiationPolicy, &Refusing] {
            let mut codec = NegotiationCodec::with_policy(policy);
            let chunk = codec.process_chunk(&input).unwrap();
            prop_assert_eq!(chunk.replies.len(), 1);
            prop_assert_eq!(
                &chunk.replies.to_bytes()[..],
                &[consts::IAC, policy.respond(verb).to_u8(), option][..]
            );
            prop_assert!(chunk.data.is_empty());
            prop_assert_eq!(codec.state(), NegotiationState::Idle);
        }
    }

    #[test]
    fn splitting_a_stream_does_not_change_the_result(
        stream in well_formed_stream(),
        cut in any::<prop::sample::Index>(),
    ) {
        let mut whole = NegotiationCodec::new();
        let expected = whole.process_chunk(&stream).unwrap();

        let at = cut.index(stream.len() + 1);
        let mut split = NegotiationCodec::new();
        let first = split.process_chunk(&stream[..at]).unwrap();
        let second = split.process_chunk(&stream[at..]).unwrap();

        let data = [&first.data[..], &second.data[..]].concat();
        let replies = [&first.replies.to_bytes()[..], &second.replies.to_bytes()[..]].concat();
        prop_assert_eq!(&data[..], &expected.data[..]);
        prop_assert_eq!(&replies[..], &expected.replies.to_bytes()[..]);
        prop_assert_eq!(split.state(), NegotiationState::Idle);
    }

    #[test]
    fn bad_verb_never_replies(
        bad in any::<u8>().prop_filter("not a verb", |b| Verb::from_u8(*b).is_none())
    ) {
        let mut codec = NegotiationCodec::new();
        let result = codec.process_chunk(&[consts::IAC, bad, 0x01]);
        prop_assert!(matches!(result, Err(ProtocolError::UnexpectedVerb(b)) if b == bad));
    }

    #[test]
    fn arbitrary_input_never_panics(input in prop::collection::vec(any::<u8>(), 0..1024)) {
        let mut codec = NegotiationCodec::with_policy(Refusing);
        let _ = codec.process_chunk(&input);
    }
}
