//! Single-character matchers, the only parsers that look at raw input

use crate::choice::{Choice, choice};
use crate::cursor::Cursor;
use crate::error::{Combinator, Failure, GrammarError};
use crate::parser::{Outcome, Parser};

/// Parser that matches exactly one expected character
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MatchChar {
    expected: char,
}

impl MatchChar {
    pub fn new(expected: char) -> Self {
        Self { expected }
    }

    pub fn expected(&self) -> char {
        self.expected
    }
}

impl<'code> Parser<'code> for MatchChar {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.value() {
            Some(found) if found == self.expected => Ok((found, cursor.next())),
            found => Err(Failure::mismatch(self.expected, found, Combinator::MatchChar)),
        }
    }
}

/// Build a [`MatchChar`] from a string that must hold exactly one character
impl TryFrom<&str> for MatchChar {
    type Error = GrammarError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(expected), None) => Ok(MatchChar::new(expected)),
            _ => Err(GrammarError::NotSingleChar(value.to_string())),
        }
    }
}

/// Convenience function to create a MatchChar parser
pub fn match_char(expected: char) -> MatchChar {
    MatchChar::new(expected)
}

/// Parser that consumes and returns any single character
#[derive(Debug, Copy, Clone, Default)]
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.value() {
            Some(found) => Ok((found, cursor.next())),
            None => Err(Failure::mismatch("any character", None, Combinator::AnyChar)),
        }
    }
}

pub fn any_char() -> AnyChar {
    AnyChar
}

/// Match any one of the given characters, trying them left to right
///
/// Fewer than two characters is rejected up front, like [`choice`].
pub fn any_of(chars: &[char]) -> Result<Choice<MatchChar>, GrammarError> {
    choice(chars.iter().copied().map(match_char).collect()).map_err(|error| match error {
        GrammarError::TooFewAlternatives { count, .. } => GrammarError::TooFewAlternatives {
            combinator: Combinator::AnyOf,
            count,
        },
        other => other,
    })
}
