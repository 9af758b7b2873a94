use crate::cursor::Cursor;
use crate::error::{Combinator, GrammarError};
use crate::parser::{Outcome, Parser};
use tracing::trace;

/// Parser combinator that tries each parser in order on the same input
///
/// Equivalent to folding [`crate::or::or`] over the list from the left: the
/// first success wins, and when every alternative fails the last failure is
/// returned. Alternatives of different concrete types can be mixed by boxing
/// them with [`crate::parser::BoxedExt::boxed`].
#[derive(Debug, Clone)]
pub struct Choice<P> {
    first: P,
    rest: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Result<Self, GrammarError> {
        if parsers.len() < 2 {
            return Err(GrammarError::TooFewAlternatives {
                combinator: Combinator::Choice,
                count: parsers.len(),
            });
        }
        let mut rest = parsers;
        let first = rest.remove(0);
        Ok(Choice { first, rest })
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut outcome = self.first.parse(cursor);

        for (index, parser) in self.rest.iter().enumerate() {
            if outcome.is_ok() {
                break;
            }
            trace!(alternative = index + 1, position = cursor.position(), "backtracking");
            outcome = parser.parse(cursor);
        }

        outcome
    }
}

/// Convenience function to create a Choice parser
///
/// Fewer than two alternatives is a grammar error, reported here rather than
/// when parsing.
pub fn choice<'code, P>(parsers: Vec<P>) -> Result<Choice<P>, GrammarError>
where
    P: Parser<'code>,
{
    Choice::new(parsers)
}
