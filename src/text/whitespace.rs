use crate::between::between;
use crate::many::many;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::primitive::match_char;

/// Parser that skips zero or more spaces and tabs
///
/// Newlines are left alone so that line-oriented grammars can match them.
pub fn whitespace<'code>() -> impl Parser<'code, Output = ()> {
    many(match_char(' ').or(match_char('\t'))).map(|_| ())
}

/// Run `parser` with optional blanks skipped on both sides
pub fn padded<'code, P>(parser: P) -> impl Parser<'code, Output = P::Output>
where
    P: Parser<'code>,
{
    between(whitespace(), parser, whitespace())
}
