//! # charcomb - Character Parser Combinators
//!
//! Composable parsers over an in-memory `&str`, built bottom-up from
//! single-character matchers and a small algebra of combinators.
//!
//! - **Pure**: a parser is an immutable value; running it never changes it,
//!   so the same parser can be run any number of times
//! - **Backtracking**: alternation always retries from the input it was given,
//!   however far a failed branch got
//! - **Two error layers**: a [`Failure`] is a parse-time mismatch; a
//!   [`GrammarError`] is a badly built grammar, reported by the constructor
//!   before any input is seen
//!
//! ```
//! use charcomb::between::between;
//! use charcomb::primitive::match_char;
//! use charcomb::separated_list::separated_by;
//! use charcomb::text::natural;
//! use charcomb::run;
//!
//! let list = between(
//!     match_char('['),
//!     separated_by(natural(), match_char(',')),
//!     match_char(']'),
//! );
//! assert_eq!(run(&list, "[1,2,3]"), Ok(vec![1, 2, 3]));
//! ```

pub mod and;
pub mod apply;
pub mod between;
pub mod bind;
pub mod choice;
pub mod cursor;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod many;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod primitive;
pub mod separated_list;
pub mod sequence;
pub mod string;
pub mod succeed;
pub mod text;

pub use and::{AndExt, and};
pub use apply::{apply, lift2};
pub use between::{between, match_first, match_second};
pub use bind::{BindExt, bind};
pub use choice::choice;
pub use cursor::Cursor;
pub use error::{Combinator, Failure, FailureKind, GrammarError};
pub use filter::{FilterExt, filter};
pub use lazy::lazy;
pub use many::{many, many1};
pub use map::{MapExt, map};
pub use optional::optional;
pub use or::{OrExt, or};
pub use parser::{BoxedExt, BoxedParser, Outcome, Parser, run};
pub use primitive::{MatchChar, any_char, any_of, match_char};
pub use separated_list::{separated_by, separated_list};
pub use sequence::sequence_n;
pub use string::match_string;
pub use succeed::{fail, succeed};
