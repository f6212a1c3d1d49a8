//! Decoding characters from byte input
//!
//! Byte input keeps its byte offsets for error locations; combine
//! [`utf8_char`] with [`filter`](crate::filter::FilterExt::filter) for Unicode
//! character classes.

use crate::cursor::Cursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};

/// Parser that consumes and returns a single UTF-8 encoded character
pub struct CharParser;

/// Length of the sequence introduced by `first`, `None` if it cannot start one
fn sequence_len(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

impl<'code> Parser<'code> for CharParser {
    type Element = u8;
    type Output = char;

    fn parse(&self, cursor: Cursor<'code, u8>) -> ParseResult<'code, u8, char> {
        let Some(&first) = cursor.peek() else {
            return Err(Failure::expected(cursor.location(), "character"));
        };

        let invalid = |message: &'static str| {
            Err(Failure::Recoverable(ParseError::custom(cursor.location(), message)))
        };

        let Some(len) = sequence_len(first) else {
            return invalid("invalid UTF-8 start byte");
        };
        let Some(bytes) = cursor.rest().get(..len) else {
            return invalid("incomplete UTF-8 sequence");
        };

        // Rejects bad continuation bytes, overlong forms and surrogates
        match std::str::from_utf8(bytes).ok().and_then(|s| s.chars().next()) {
            Some(c) => Ok((c, cursor.advance(len)?)),
            None => invalid("invalid UTF-8 sequence"),
        }
    }
}

pub fn utf8_char() -> CharParser {
    CharParser
}
