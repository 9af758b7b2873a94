use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{Outcome, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Always succeeds. The inner parser must consume input whenever it
/// succeeds; one that can succeed without consuming (for example `many` of
/// `many`, or `optional`) makes this loop forever.
#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        Ok(repeat(&self.parser, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Same loop as [`Many`], with the same termination requirement on the
/// inner parser. Zero matches is an `EmptyRepetition` failure rather than
/// the inner parser's failure.
#[derive(Debug, Clone)]
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (results, cursor) = repeat(&self.parser, cursor);
        if results.is_empty() {
            return Err(Failure::empty_repetition());
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

fn repeat<'code, P>(parser: &P, mut cursor: Cursor<'code>) -> (Vec<P::Output>, Cursor<'code>)
where
    P: Parser<'code>,
{
    let mut results = Vec::new();

    // The first failure ends the repetition and is not propagated
    while let Ok((value, next_cursor)) = parser.parse(cursor) {
        results.push(value);
        cursor = next_cursor;
    }

    (results, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Combinator, FailureKind};
    use crate::primitive::{any_char, match_char};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_many_zero_matches() {
        let parser = many(match_char('a'));

        let (results, cursor) = parser.parse(Cursor::new("xyz")).unwrap();
        assert!(results.is_empty());
        assert_eq!(cursor.value(), Some('x'));
    }

    #[test]
    fn test_many_multiple_matches() {
        let parser = many(match_char('A'));

        let (results, cursor) = parser.parse(Cursor::new("AAAB")).unwrap();
        assert_eq!(results, vec!['A', 'A', 'A']);
        assert_eq!(cursor.rest(), "B");
    }

    #[test]
    fn test_many_all_matches() {
        let parser = many(any_char());

        let (results, cursor) = parser.parse(Cursor::new("hello")).unwrap();
        assert_eq!(results, vec!['h', 'e', 'l', 'l', 'o']);
        assert!(matches!(cursor, Cursor::EndOfFile { .. }));
    }

    #[test]
    fn test_many_empty_input() {
        let parser = many(match_char('a'));

        let (results, cursor) = parser.parse(Cursor::new("")).unwrap();
        assert!(results.is_empty());
        assert!(cursor.eos());
    }

    #[test]
    fn test_many1_zero_matches_fails() {
        let parser = many1(match_char('A'));

        let failure = parser.parse(Cursor::new("B")).unwrap_err();
        assert_eq!(failure.kind(), FailureKind::EmptyRepetition);
        assert_eq!(failure.origin(), Combinator::Many1);
        assert_eq!(failure.message(), "needs at least one match");
    }

    #[test]
    fn test_many1_one_match() {
        let parser = many1(match_char('a'));

        let (results, cursor) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(cursor.value(), Some('b'));
    }

    #[test]
    fn test_many1_multiple_matches() {
        let parser = many1(match_char('a'));

        let (results, cursor) = parser.parse(Cursor::new("aaabcd")).unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(cursor.rest(), "bcd");
    }

    #[test]
    fn test_many1_empty_input() {
        let failure = many1(match_char('a')).parse(Cursor::new("")).unwrap_err();
        assert_eq!(failure.kind(), FailureKind::EmptyRepetition);
    }
}
