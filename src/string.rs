use crate::map::Map;
use crate::primitive::{MatchChar, match_char};
use crate::sequence::SequenceN;

/// Parser returned by [`match_string`]
pub type MatchString = Map<SequenceN<MatchChar>, fn(Vec<char>) -> String>;

/// Parser that matches an exact string character by character
///
/// On a mismatch the failure is that of the first character that did not
/// match. The empty string always matches and consumes nothing.
pub fn match_string(expected: &str) -> MatchString {
    let join: fn(Vec<char>) -> String = |chars| chars.into_iter().collect();
    Map::new(SequenceN::new(expected.chars().map(match_char).collect()), join)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::error::{Combinator, FailureKind};
    use crate::or::OrExt;
    use crate::parser::{Parser, run};
    use crate::primitive::any_char;

    #[test]
    fn test_exact_match() {
        assert_eq!(run(&match_string("hello"), "hello"), Ok("hello".to_string()));
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let (result, cursor) = match_string("ABC").parse(Cursor::new("ABCD")).unwrap();

        assert_eq!(result, "ABC");
        assert_eq!(cursor.rest(), "D");
    }

    #[test]
    fn test_unicode_string() {
        let (result, remaining) = match_string("こんにちは").parse(Cursor::new("こんにちは世界")).unwrap();
        assert_eq!(result, "こんにちは");

        let (next_char, _) = any_char().parse(remaining).unwrap();
        assert_eq!(next_char, '世');
    }

    #[test]
    fn test_mismatch_reports_offending_char() {
        let failure = match_string("hello").parse(Cursor::new("help")).unwrap_err();

        assert_eq!(failure.kind(), FailureKind::MatchMismatch);
        assert_eq!(failure.origin(), Combinator::MatchChar);
        assert_eq!(failure.message(), "expected 'l' got 'p'");
    }

    #[test]
    fn test_input_too_short() {
        let failure = match_string("hello").parse(Cursor::new("hel")).unwrap_err();
        assert_eq!(failure.message(), "expected 'l' got ''");
    }

    #[test]
    fn test_empty_string_matches_nothing() {
        let cursor = Cursor::new("abc");
        let (result, rest) = match_string("").parse(cursor).unwrap();

        assert_eq!(result, "");
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_keyword_alternatives_backtrack() {
        let parser = match_string("let").or(match_string("loop"));

        assert_eq!(run(&parser, "loop {}"), Ok("loop".to_string()));
        assert_eq!(run(&parser, "let x"), Ok("let".to_string()));
    }
}
