//! Parsers for ASCII text in byte input

pub mod number;
pub mod whitespace;

pub use number::{Number, f64, i64, number, u64};
pub use whitespace::{lexeme, padded, whitespace, whitespace0};

use crate::and::AndExt;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::position::PositionExt;
use crate::primitive::{satisfy, take_while};

/// Parser that matches a single ASCII digit (0-9)
pub fn digit<'code>() -> impl Parser<'code, Element = u8, Output = u8> {
    satisfy(|b: &u8| b.is_ascii_digit(), "digit")
}

/// Parser that matches a single ASCII letter
pub fn alpha<'code>() -> impl Parser<'code, Element = u8, Output = u8> {
    satisfy(|b: &u8| b.is_ascii_alphabetic(), "letter")
}

pub fn alphanumeric<'code>() -> impl Parser<'code, Element = u8, Output = u8> {
    satisfy(|b: &u8| b.is_ascii_alphanumeric(), "letter or digit")
}

/// Parser that matches an identifier: a letter or `_`, then any number of
/// letters, digits and `_`
pub fn ident<'code>() -> impl Parser<'code, Element = u8, Output = &'code str> {
    satisfy(|b: &u8| b.is_ascii_alphabetic() || *b == b'_', "identifier")
        .and(take_while(|b: &u8| b.is_ascii_alphanumeric() || *b == b'_'))
        .recognize()
        // Only ASCII bytes get this far
        .map(|bytes| std::str::from_utf8(bytes).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use rstest::rstest;

    #[rstest]
    #[case(b'0', true, false, true)]
    #[case(b'9', true, false, true)]
    #[case(b'a', false, true, true)]
    #[case(b'Z', false, true, true)]
    #[case(b'_', false, false, false)]
    #[case(b' ', false, false, false)]
    fn test_classes(
        #[case] input: u8,
        #[case] is_digit: bool,
        #[case] is_alpha: bool,
        #[case] is_alphanumeric: bool,
    ) {
        let data = [input];
        assert_eq!(digit().parse(Cursor::new(&data)).is_ok(), is_digit);
        assert_eq!(alpha().parse(Cursor::new(&data)).is_ok(), is_alpha);
        assert_eq!(alphanumeric().parse(Cursor::new(&data)).is_ok(), is_alphanumeric);
    }

    #[rstest]
    #[case(b"foo", Some("foo"))]
    #[case(b"_tmp1 = 2", Some("_tmp1"))]
    #[case(b"x_y_Z9+", Some("x_y_Z9"))]
    #[case(b"9lives", None)]
    #[case(b"", None)]
    fn test_ident(#[case] data: &[u8], #[case] expected: Option<&str>) {
        let result = ident().parse(Cursor::new(data));
        assert_eq!(result.ok().map(|(name, _)| name), expected);
    }

    #[test]
    fn test_ident_failure_label() {
        let failure = ident().parse(Cursor::new(b"1")).unwrap_err();
        assert_eq!(
            failure.parse_error().unwrap().expected().collect::<Vec<_>>(),
            vec!["identifier"]
        );
    }

    #[test]
    fn test_digit_at_eof() {
        let data = b"";
        let failure = digit().parse(Cursor::new(data)).unwrap_err();
        assert_eq!(
            failure.parse_error().unwrap().expected().collect::<Vec<_>>(),
            vec!["digit"]
        );
    }
}
