use std::borrow::Cow;
use std::fmt;

/// The combinator a [`Failure`] or [`GrammarError`] originates from
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Combinator {
    MatchChar,
    AnyChar,
    AnyOf,
    Choice,
    Many1,
    Filter,
    Fail,
}

impl Combinator {
    pub fn name(self) -> &'static str {
        match self {
            Combinator::MatchChar => "match_char",
            Combinator::AnyChar => "any_char",
            Combinator::AnyOf => "any_of",
            Combinator::Choice => "choice",
            Combinator::Many1 => "many1",
            Combinator::Filter => "filter",
            Combinator::Fail => "fail",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of parse-time failures
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A primitive matcher saw a different character, or the end of input
    MatchMismatch,
    /// A one-or-more combinator matched nothing
    EmptyRepetition,
    /// A parsed value was refused by a predicate, or `fail` was reached
    Rejected,
}

/// A parser did not match its input
///
/// Failures carry no partial value and no position: whoever recovers from
/// one (alternation, `optional`, repetition) already holds the cursor it
/// started from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{origin}: {message}")]
pub struct Failure {
    kind: FailureKind,
    message: Cow<'static, str>,
    origin: Combinator,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<Cow<'static, str>>, origin: Combinator) -> Self {
        Self {
            kind,
            message: message.into(),
            origin,
        }
    }

    pub(crate) fn mismatch(expected: impl fmt::Display, found: Option<char>, origin: Combinator) -> Self {
        let found = found.map(String::from).unwrap_or_default();
        Self::new(
            FailureKind::MatchMismatch,
            format!("expected '{expected}' got '{found}'"),
            origin,
        )
    }

    pub(crate) fn empty_repetition() -> Self {
        Self::new(
            FailureKind::EmptyRepetition,
            "needs at least one match",
            Combinator::Many1,
        )
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn origin(&self) -> Combinator {
        self.origin
    }
}

/// A combinator was built from invalid static arguments
///
/// Raised while the grammar is assembled, before any input is seen. Never
/// produced by `parse`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("length of string to match must be 1, got {0:?}")]
    NotSingleChar(String),
    #[error("{combinator} needs at least two alternatives, got {count}")]
    TooFewAlternatives { combinator: Combinator, count: usize },
}
