//! Lexical helpers for building text grammars: digits, numbers, words and blanks

pub mod number;
pub mod whitespace;

pub use number::{digit, digits, natural};
pub use whitespace::{padded, whitespace};

use crate::filter::FilterExt;
use crate::many::many1;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::primitive::any_char;

/// Parser that matches a single ASCII letter
pub fn letter<'code>() -> impl Parser<'code, Output = char> {
    any_char().filter(char::is_ascii_alphabetic, "expected letter")
}

/// Parser that matches a run of one or more ASCII letters
pub fn letters<'code>() -> impl Parser<'code, Output = String> {
    many1(letter()).map(|chars| chars.into_iter().collect::<String>())
}
