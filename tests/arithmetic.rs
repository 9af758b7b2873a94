//! Arithmetic evaluators assembled from the combinator algebra
//!
//! Three shapes of the same idea: a flat `lift2` grammar for `a op b`, a
//! right-folding chain of partially applied operators, and a fully recursive
//! parenthesised grammar that builds an expression tree before evaluating it.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use charcomb::text::{natural, padded, whitespace};
use charcomb::{
    AndExt, BoxedExt, BoxedParser, MapExt, OrExt, Parser, any_of, choice, lazy, lift2, many,
    match_char, match_first, match_second, run,
};
use pretty_assertions::assert_eq;

fn number<'code>() -> impl Parser<'code, Output = f64> {
    natural().map(|n| n as f64)
}

// -- Flat grammar: <number> [op <number>] --

fn flat_expr<'code>() -> BoxedParser<'code, f64> {
    let add = lift2(|x: f64| move |y: f64| x + y);
    let sub = lift2(|x: f64| move |y: f64| x - y);
    let mul = lift2(|x: f64| move |y: f64| x * y);
    let div = lift2(|x: f64| move |y: f64| x / y);

    choice(vec![
        add.call(match_first(number(), padded(match_char('+'))), number()).boxed(),
        sub.call(match_first(number(), padded(match_char('-'))), number()).boxed(),
        mul.call(match_first(number(), padded(match_char('*'))), number()).boxed(),
        div.call(match_first(number(), padded(match_char('/'))), number()).boxed(),
        number().boxed(),
    ])
    .expect("five alternatives")
    .boxed()
}

#[test]
fn test_flat_expressions() {
    let expr = flat_expr();

    assert_eq!(run(&expr, "123 + 456"), Ok(579.0));
    assert_eq!(run(&expr, "123"), Ok(123.0));
    assert_eq!(run(&expr, "123 * 45"), Ok(5535.0));
    assert_eq!(run(&expr, "10-4"), Ok(6.0));
    assert_eq!(run(&expr, "9 / 3"), Ok(3.0));
}

#[test]
fn test_flat_expression_backtracks_to_bare_number() {
    // Each operator branch reads "7 " before failing on '%'
    let (value, rest) = flat_expr().parse(charcomb::Cursor::new("7 % 2")).unwrap();

    assert_eq!(value, 7.0);
    assert_eq!(rest.rest(), " % 2");
}

#[test]
fn test_flat_expression_rejects_garbage() {
    assert!(run(&flat_expr(), "x + 1").is_err());
}

// -- Operator chain: (<number> op)* <number>, applied right to left --

type Partial = Box<dyn Fn(f64) -> f64>;

fn chain_expr<'code>() -> impl Parser<'code, Output = f64> {
    let partial = |op: char, apply: fn(f64, f64) -> f64| {
        match_first(
            match_second(whitespace(), number()),
            padded(match_char(op)),
        )
        .map(move |x| Box::new(move |y| apply(x, y)) as Partial)
    };
    let operator = choice(vec![
        partial('+', |x, y| x + y).boxed(),
        partial('-', |x, y| x - y).boxed(),
        partial('*', |x, y| x * y).boxed(),
        partial('/', |x, y| x / y).boxed(),
    ])
    .expect("four operators");

    many(operator)
        .and(match_second(whitespace(), number()))
        .map(|(partials, last)| partials.iter().rev().fold(last, |acc, f| f(acc)))
}

#[test]
fn test_chain_is_right_associative() {
    let expr = chain_expr();

    assert_eq!(run(&expr, "1 + 2 * 3"), Ok(7.0));
    assert_eq!(run(&expr, "2 * 3 + 1"), Ok(8.0));
    assert_eq!(run(&expr, "10 - 4 - 3"), Ok(9.0));
    assert_eq!(run(&expr, "  42"), Ok(42.0));
}

// -- Recursive grammar: <number> | '(' expr op expr ')' --

#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Num(f64),
    Binary { op: Op, lhs: Box<Expr>, rhs: Box<Expr> },
}

fn op<'code>() -> impl Parser<'code, Output = Op> {
    any_of(&['+', '-', '*', '/'])
        .expect("four operators")
        .map(|c| match c {
            '+' => Op::Add,
            '-' => Op::Sub,
            '*' => Op::Mul,
            _ => Op::Div,
        })
}

fn expr<'code>() -> BoxedParser<'code, Expr> {
    let literal = natural().map(|n| Expr::Num(n as f64));
    let binary = charcomb::between(
        match_char('('),
        padded(lazy(expr)).and(op()).and(padded(lazy(expr))),
        match_char(')'),
    )
    .map(|((lhs, op), rhs)| Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    });

    literal.or(binary).boxed()
}

fn eval(expr: &Expr) -> f64 {
    match expr {
        Expr::Num(x) => *x,
        Expr::Binary { op, lhs, rhs } => {
            let (x, y) = (eval(lhs), eval(rhs));
            match op {
                Op::Add => x + y,
                Op::Sub => x - y,
                Op::Mul => x * y,
                Op::Div => x / y,
            }
        }
    }
}

#[test]
fn test_recursive_tree() {
    let tree = run(&expr(), "(1 + (2 * 3))").unwrap();

    assert_eq!(
        tree,
        Expr::Binary {
            op: Op::Add,
            lhs: Box::new(Expr::Num(1.0)),
            rhs: Box::new(Expr::Binary {
                op: Op::Mul,
                lhs: Box::new(Expr::Num(2.0)),
                rhs: Box::new(Expr::Num(3.0)),
            }),
        }
    );
}

#[test]
fn test_recursive_evaluation() {
    let parse_and_eval = |input| run(&expr(), input).map(|tree| eval(&tree));

    assert_eq!(parse_and_eval("5"), Ok(5.0));
    assert_eq!(parse_and_eval("(8 / 2)"), Ok(4.0));
    assert_eq!(parse_and_eval("((1 + 2) * (10 - 4))"), Ok(18.0));
    assert_eq!(parse_and_eval("(((1+1)+1)+1)"), Ok(4.0));
}

#[test]
fn test_recursive_unbalanced_fails() {
    assert!(run(&expr(), "(1 + 2").is_err());
    assert!(run(&expr(), "(1 2)").is_err());
}
