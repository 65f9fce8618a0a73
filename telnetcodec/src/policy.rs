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

//! Negotiation policies
//!
//! A policy decides what the client answers when the peer sends
//! `IAC <verb> <option>`. [`NegotiationPolicy::respond`] is total over the four
//! verbs and pure. [`NegotiationPolicy::suppress`] lets a policy stay silent for
//! a particular `(verb, option)` pair instead of answering.

use crate::{TelnetOption, Verb};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Strategy for answering option negotiation requests.
pub trait NegotiationPolicy: Send + Sync {
    /// Returns the verb to answer `verb` with.
    fn respond(&self, verb: Verb) -> Verb;

    /// Returns `true` when no reply should be sent for this command.
    fn suppress(&self, _verb: Verb, _option: TelnetOption) -> bool {
        false
    }
}

/// Agrees to whatever the peer offers and declines to perform anything itself.
///
/// | received | reply |
/// |----------|-------|
/// | WILL     | DO    |
/// | DO       | WONT  |
/// | DONT     | WONT  |
/// | WONT     | DONT  |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reciprocating;

impl NegotiationPolicy for Reciprocating {
    fn respond(&self, verb: Verb) -> Verb {
        match verb {
            Verb::Will => Verb::Do,
            Verb::Do => Verb::Wont,
            Verb::Dont => Verb::Wont,
            Verb::Wont => Verb::Dont,
        }
    }
}

/// Declines every option in both directions.
///
/// | received | reply |
/// |----------|-------|
/// | WILL     | DONT  |
/// | DO       | WONT  |
/// | DONT     | WONT  |
/// | WONT     | DONT  |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Refusing;

impl NegotiationPolicy for Refusing {
    fn respond(&self, verb: Verb) -> Verb {
        match verb {
            Verb::Will | Verb::Wont => Verb::Dont,
            Verb::Do | Verb::Dont => Verb::Wont,
        }
    }
}

/// Wraps a policy and never answers commands for the listed options.
///
/// Options are matched by wire value, so `Unknown(1)` and `Echo` name the same
/// entry.
#[derive(Clone, Debug, Default)]
pub struct IgnoreOptions<P> {
    inner: P,
    ignored: BTreeSet<u8>,
}

impl<P: NegotiationPolicy> IgnoreOptions<P> {
    /// Wraps `inner` with an empty ignore list.
    pub fn new(inner: P) -> Self {
        IgnoreOptions {
            inner,
            ignored: BTreeSet::new(),
        }
    }

    /// Adds `option` to the ignore list.
    pub fn with_ignored(mut self, option: impl Into<TelnetOption>) -> Self {
        self.ignored.insert(option.into().to_u8());
        self
    }

    /// Whether commands for `option` are skipped.
    pub fn is_ignored(&self, option: TelnetOption) -> bool {
        self.ignored.contains(&option.to_u8())
    }
}

impl<P: NegotiationPolicy> NegotiationPolicy for IgnoreOptions<P> {
    fn respond(&self, verb: Verb) -> Verb {
        self.inner.respond(verb)
    }

    fn suppress(&self, verb: Verb, option: TelnetOption) -> bool {
        self.is_ignored(option) || self.inner.suppress(verb, option)
    }
}

impl NegotiationPolicy for Box<dyn NegotiationPolicy> {
    fn respond(&self, verb: Verb) -> Verb {
        (**self).respond(verb)
    }

    fn suppress(&self, verb: Verb, option: TelnetOption) -> bool {
        (**self).suppress(verb, option)
    }
}

impl<P: NegotiationPolicy + ?Sized> NegotiationPolicy for Arc<P> {
    fn respond(&self, verb: Verb) -> Verb {
        (**self).respond(verb)
    }

    fn suppress(&self, verb: Verb, option: TelnetOption) -> bool {
        (**self).suppress(verb, option)
    }
}

impl<P: NegotiationPolicy + ?Sized> NegotiationPolicy for &P {
    fn respond(&self, verb: Verb) -> Verb {
        (**self).respond(verb)
    }

    fn suppress(&self, verb: Verb, option: TelnetOption) -> bool {
        (**self).suppress(verb, option)
    }
}

/// Selects one of the built-in policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolicyKind {
    /// [`Reciprocating`]
    #[default]
    Reciprocating,
    /// [`Refusing`]
    Refusing,
}

impl PolicyKind {
    /// Builds the selected policy, skipping replies for every option in `ignored`.
    pub fn build<I>(self, ignored: I) -> Box<dyn NegotiationPolicy>
    where
        I: IntoIterator<Item = TelnetOption>,
    {
        match self {
            PolicyKind::Reciprocating => Box::new(with_ignored(Reciprocating, ignored)),
            PolicyKind::Refusing => Box::new(with_ignored(Refusing, ignored)),
        }
    }
}

fn with_ignored<P, I>(inner: P, ignored: I) -> IgnoreOptions<P>
where
    P: NegotiationPolicy,
    I: IntoIterator<Item = TelnetOption>,
{
    ignored
        .into_iter()
        .fold(IgnoreOptions::new(inner), |policy, option| {
            policy.with_ignored(option)
        })
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PolicyKind::Reciprocating => "reciprocating",
            PolicyKind::Refusing => "refusing",
        })
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown negotiation policy '{0}' (expected 'reciprocating' or 'refusing')")]
pub struct ParsePolicyError(String);

impl std::str::FromStr for PolicyKind {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reciprocating" | "reciprocate" => Ok(PolicyKind::Reciprocating),
            "refusing" | "refuse" => Ok(PolicyKind::Refusing),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reciprocating_table() {
        let policy = Reciprocating;
        assert_eq!(policy.respond(Verb::Will), Verb::Do);
        assert_eq!(policy.respond(Verb::Do), Verb::Wont);
        assert_eq!(policy.respond(Verb::Dont), Verb::Wont);
        assert_eq!(policy.respond(Verb::Wont), Verb::Dont);
    }

    #[test]
    fn refusing_table() {
        let policy = Refusing;
        assert_eq!(policy.respond(Verb::Will), Verb::Dont);
        assert_eq!(policy.respond(Verb::Do), Verb::Wont);
        assert_eq!(policy.respond(Verb::Dont), Verb::Wont);
        assert_eq!(policy.respond(Verb::Wont), Verb::Dont);
    }

    #[test]
    fn policies_differ_on_will() {
        assert_ne!(Reciprocating.respond(Verb::Will), Refusing.respond(Verb::Will));
    }

    #[test]
    fn refusing_never_agrees() {
        for verb in Verb::ALL {
            assert!(matches!(Refusing.respond(verb), Verb::Wont | Verb::Dont));
        }
    }

    #[test]
    fn builtins_answer_everything() {
        for verb in Verb::ALL {
            for byte in 0..=u8::MAX {
                assert!(!Reciprocating.suppress(verb, TelnetOption::from(byte)));
                assert!(!Refusing.suppress(verb, TelnetOption::from(byte)));
            }
        }
    }

    #[test]
    fn ignore_list_only_affects_listed_options() {
        let policy = IgnoreOptions::new(Refusing).with_ignored(TelnetOption::TTYPE);
        assert!(policy.suppress(Verb::Do, TelnetOption::TTYPE));
        assert!(policy.suppress(Verb::Will, TelnetOption::TTYPE));
        assert!(!policy.suppress(Verb::Do, TelnetOption::Echo));
        assert_eq!(policy.respond(Verb::Will), Verb::Dont);
    }

    #[test]
    fn ignore_list_matches_by_wire_value() {
        let policy = IgnoreOptions::new(Reciprocating).with_ignored(TelnetOption::Unknown(1));
        assert!(policy.is_ignored(TelnetOption::Echo));
        assert!(policy.suppress(Verb::Do, TelnetOption::from_u8(1)));

        let policy = IgnoreOptions::new(Reciprocating).with_ignored(TelnetOption::NAWS);
        assert!(policy.is_ignored(TelnetOption::Unknown(31)));
    }

    #[test]
    fn build_from_kind() {
        let policy = PolicyKind::Refusing.build([TelnetOption::NAWS]);
        assert_eq!(policy.respond(Verb::Will), Verb::Dont);
        assert!(policy.suppress(Verb::Do, TelnetOption::NAWS));
        assert!(!policy.suppress(Verb::Do, TelnetOption::Echo));

        let policy = PolicyKind::default().build(std::iter::empty());
        assert_eq!(policy.respond(Verb::Will), Verb::Do);
    }

    #[test]
    fn parse_kind() {
        assert_eq!("refusing".parse::<PolicyKind>(), Ok(PolicyKind::Refusing));
        assert_eq!(
            "Reciprocating".parse::<PolicyKind>(),
            Ok(PolicyKind::Reciprocating)
        );
        assert!("sometimes".parse::<PolicyKind>().is_err());
        assert_eq!(PolicyKind::Refusing.to_string(), "refusing");
    }
}
