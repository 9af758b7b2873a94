use crate::cursor::Cursor;
use crate::many::Many1;
use crate::parser::{Outcome, Parser};

/// One element of a [`SeparatedBy`] list: the element, then its separator if present
///
/// Same result as `choice(match_first(parser, separator), parser)`: both
/// alternatives start with `parser`, so when the separator is missing the
/// element's result is reused instead of parsing it a second time.
#[derive(Debug, Clone)]
pub struct Element<P, PS> {
    parser: P,
    separator: PS,
}

impl<'code, P, PS> Parser<'code> for Element<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        match self.separator.parse(cursor) {
            Ok((_, after_separator)) => Ok((value, after_separator)),
            Err(_) => Ok((value, cursor)),
        }
    }
}

/// Parser combinator that matches one or more elements, each optionally followed by a separator
///
/// This is `many1` over "element, then separator if there is one". It is
/// permissive: a trailing separator is consumed, and two elements that
/// happen to abut without a separator are both accepted. It never matches
/// an empty list; zero elements is an `EmptyRepetition` failure.
///
/// # Examples
/// - `"1,2,3"` → `vec![1, 2, 3]`
/// - `"1,2,"` → `vec![1, 2]` with the trailing `,` consumed
///
/// Use [`separated_list`] when separators must sit strictly between elements.
pub type SeparatedBy<P, PS> = Many1<Element<P, PS>>;

pub fn separated_by<'code, P, PS>(parser: P, separator: PS) -> SeparatedBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    Many1::new(Element { parser, separator })
}

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Note
/// - Requires at least one element; the element's failure is returned otherwise
/// - A separator must be followed by an element, so trailing separators fail
/// - Does not handle whitespace automatically
#[derive(Debug, Clone)]
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut results = Vec::new();

        // Parse the first element (required)
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        results.push(first_value);

        // Parse remaining elements preceded by separator
        loop {
            let after_separator = match self.separator.parse(cursor) {
                Ok((_, new_cursor)) => new_cursor,
                Err(_) => break,
            };

            // A separator commits to another element
            let (value, next_cursor) = self.parser.parse(after_separator)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}
