use crate::bind::BindExt;
use crate::filter::FilterExt;
use crate::many::many1;
use crate::map::MapExt;
use crate::parser::{BoxedExt, BoxedParser, Parser};
use crate::primitive::any_char;
use crate::succeed::{fail, succeed};

/// Parser that matches a single ASCII digit
pub fn digit<'code>() -> impl Parser<'code, Output = char> {
    any_char().filter(char::is_ascii_digit, "expected digit")
}

/// Parser that matches one or more ASCII digits and returns them as written
pub fn digits<'code>() -> impl Parser<'code, Output = String> {
    many1(digit()).map(|chars| chars.into_iter().collect::<String>())
}

/// Parser for an unsigned decimal literal
///
/// Leading zeros are accepted. A literal that does not fit in a `u64` is a
/// `Rejected` failure rather than a silent wrap.
pub fn natural<'code>() -> impl Parser<'code, Output = u64> {
    digits().bind(|literal| -> BoxedParser<'code, u64> {
        match literal.parse::<u64>() {
            Ok(value) => succeed(value).boxed(),
            Err(_) => fail(format!("number out of range: {literal}")).boxed(),
        }
    })
}
