//! Sequencing that keeps one side and discards the other
//!
//! These are `and` followed by a projection. The discarded parser still has
//! to match: this is how delimiters and padding are enforced without
//! cluttering the output.

use crate::and::And;
use crate::map::Map;
use crate::parser::Parser;

/// Parser returned by [`match_first`]
pub type MatchFirst<P1, P2, A, B> = Map<And<P1, P2>, fn((A, B)) -> A>;

/// Parser returned by [`match_second`]
pub type MatchSecond<P1, P2, A, B> = Map<And<P1, P2>, fn((A, B)) -> B>;

/// Parser returned by [`between`]
pub type Between<'code, P1, P2, P3> = MatchSecond<
    P1,
    MatchFirst<P2, P3, <P2 as Parser<'code>>::Output, <P3 as Parser<'code>>::Output>,
    <P1 as Parser<'code>>::Output,
    <P2 as Parser<'code>>::Output,
>;

/// Match `first` then `second`, keeping only the first value
pub fn match_first<'code, P1, P2>(
    first: P1,
    second: P2,
) -> MatchFirst<P1, P2, P1::Output, P2::Output>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    let project: fn((P1::Output, P2::Output)) -> P1::Output = |(kept, _)| kept;
    Map::new(And::new(first, second), project)
}

/// Match `first` then `second`, keeping only the second value
pub fn match_second<'code, P1, P2>(
    first: P1,
    second: P2,
) -> MatchSecond<P1, P2, P1::Output, P2::Output>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    let project: fn((P1::Output, P2::Output)) -> P2::Output = |(_, kept)| kept;
    Map::new(And::new(first, second), project)
}

/// Creates a parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the content value with
/// the delimiters discarded. No whitespace handling; wrap the delimiters in
/// [`crate::text::padded`] for that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<'code, P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    match_second(open, match_first(content, close))
}
