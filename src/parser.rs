use crate::cursor::Cursor;
use crate::error::Failure;
use tracing::debug;

/// The result of running a parser once
///
/// `Ok((value, rest))` where `rest` is a suffix of the input the parser was
/// handed, or `Err(failure)` with no partial value.
pub type Outcome<'code, T> = Result<(T, Cursor<'code>), Failure>;

/// Core parser trait for parser combinators
///
/// Implementors are immutable once built and take `&self`, so a parser can be
/// run any number of times.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the cursor after it on success.
    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output>;
}

/// A type-erased parser, for recursive grammars and heterogeneous alternatives
///
/// Boxed parsers are `Send + Sync`, so a grammar built from them can be
/// shared between threads like any other parser.
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + Send + Sync + 'code>;

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + Send + Sync + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + Send + Sync + 'code {}

/// Run a parser against the start of `input`
///
/// Unconsumed input after a successful parse is ignored. On failure the
/// message and originating combinator are logged and handed back; no value
/// is produced.
pub fn run<'code, P>(parser: &P, input: &'code str) -> Result<P::Output, Failure>
where
    P: Parser<'code> + ?Sized,
{
    match parser.parse(Cursor::new(input)) {
        Ok((value, _)) => Ok(value),
        Err(failure) => {
            debug!(origin = %failure.origin(), reason = failure.message(), "parse failed");
            Err(failure)
        }
    }
}
