use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that picks the next parser based on the value just parsed
///
/// This is the only combinator whose continuation depends on a parsed value,
/// which is what makes context-sensitive formats such as length-prefixed
/// fields expressible. The continuation builds a fresh parser on every
/// successful run of the first one.
#[derive(Debug, Clone)]
pub struct Bind<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        Bind {
            parser,
            continuation,
        }
    }
}

impl<'code, P, F, P2> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.continuation)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, P2>(parser: P, continuation: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'code>,
{
    Bind::new(parser, continuation)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, P2>(self, continuation: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> P2,
        P2: Parser<'code>,
    {
        Bind::new(self, continuation)
    }
}

impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
