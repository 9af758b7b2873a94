use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};
use std::fmt;
use std::sync::OnceLock;

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// This is what makes self-referential grammars possible: a grammar function
/// can mention itself through `lazy(expr)` without recursing while it is being
/// built. The parser is built on first use and reused afterwards.
///
/// A grammar function that refers to itself has to return a nameable type,
/// typically [`crate::parser::BoxedParser`], since an `impl Parser` type
/// would contain itself.
pub struct Lazy<F, P> {
    factory: F,
    parser: OnceLock<P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceLock::new(),
        }
    }
}

impl<F, P> fmt::Debug for Lazy<F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("built", &self.parser.get().is_some())
            .finish()
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        self.parser.get_or_init(&self.factory).parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
