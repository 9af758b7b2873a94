use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};
use crate::succeed::{Succeed, succeed};

/// Parser combinator that applies a parsed function to a parsed value
///
/// Runs the function parser first, then the value parser on its remainder.
#[derive(Debug, Clone)]
pub struct Apply<PF, PT> {
    function: PF,
    argument: PT,
}

impl<PF, PT> Apply<PF, PT> {
    pub fn new(function: PF, argument: PT) -> Self {
        Apply { function, argument }
    }
}

impl<'code, PF, PT, F, A, B> Parser<'code> for Apply<PF, PT>
where
    PF: Parser<'code, Output = F>,
    PT: Parser<'code, Output = A>,
    F: FnOnce(A) -> B,
{
    type Output = B;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (function, cursor) = self.function.parse(cursor)?;
        let (argument, cursor) = self.argument.parse(cursor)?;
        Ok((function(argument), cursor))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, PF, PT, F, A, B>(function: PF, argument: PT) -> Apply<PF, PT>
where
    PF: Parser<'code, Output = F>,
    PT: Parser<'code, Output = A>,
    F: FnOnce(A) -> B,
{
    Apply::new(function, argument)
}

/// A curried two-argument function lifted to work on parsers
///
/// ```
/// use charcomb::apply::lift2;
/// use charcomb::text::natural;
/// use charcomb::run;
///
/// let add = lift2(|x: u64| move |y: u64| x + y);
/// let parser = add.call(natural(), charcomb::between::match_second(
///     charcomb::primitive::match_char('+'),
///     natural(),
/// ));
/// assert_eq!(run(&parser, "2+3"), Ok(5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Lift2<F> {
    function: F,
}

/// The parser [`Lift2::call`] builds: `apply(apply(succeed(f), pa), pb)`
pub type Lifted2<F, PA, PB> = Apply<Apply<Succeed<F>, PA>, PB>;

impl<F> Lift2<F>
where
    F: Clone,
{
    /// Combine two parsers with the lifted function
    ///
    /// Can be called any number of times; each call gets its own copy of
    /// the function.
    pub fn call<'code, PA, PB, G, C>(&self, first: PA, second: PB) -> Lifted2<F, PA, PB>
    where
        PA: Parser<'code>,
        PB: Parser<'code>,
        F: Fn(PA::Output) -> G,
        G: FnOnce(PB::Output) -> C,
    {
        Apply::new(Apply::new(succeed(self.function.clone()), first), second)
    }
}

/// Lift a curried function `a -> b -> c` into a combinator over two parsers
pub fn lift2<F>(function: F) -> Lift2<F>
where
    F: Clone,
{
    Lift2 { function }
}
