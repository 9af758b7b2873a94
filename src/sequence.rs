use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that runs a list of parsers one after another
///
/// Collects every output in order. The first failure aborts the whole
/// sequence and is returned unchanged. An empty list matches nothing and
/// succeeds with an empty `Vec`.
#[derive(Debug, Clone)]
pub struct SequenceN<P> {
    parsers: Vec<P>,
}

impl<P> SequenceN<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        SequenceN { parsers }
    }
}

impl<'code, P> Parser<'code> for SequenceN<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a SequenceN parser
pub fn sequence_n<'code, P>(parsers: Vec<P>) -> SequenceN<P>
where
    P: Parser<'code>,
{
    SequenceN::new(parsers)
}
