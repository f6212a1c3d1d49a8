use crate::and::AndExt;
use crate::literal::text;
use crate::map::MapExt;
use crate::optional::OptionalExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::position::PositionExt;
use crate::primitive::{one_of, take_while1};

fn digits<'code>() -> impl Parser<'code, Element = u8, Output = &'code [u8]> {
    take_while1(|b: &u8| b.is_ascii_digit(), "digit")
}

/// Digits are ASCII, so this never sees invalid UTF-8
fn as_str(bytes: &[u8]) -> &str {
    std::str::from_utf8(bytes).unwrap_or_default()
}

/// Parser that matches one or more ASCII digits and returns them as a u64
pub fn u64<'code>() -> impl Parser<'code, Element = u8, Output = u64> {
    digits().try_map(|bytes| {
        as_str(bytes)
            .parse::<u64>()
            .map_err(|_| format!("number too large: {}", as_str(bytes)))
    })
}

/// Parser that matches ASCII integer numbers (positive or negative)
pub fn i64<'code>() -> impl Parser<'code, Element = u8, Output = i64> {
    one_of(b"+-")
        .optional()
        .and(digits())
        .recognize()
        .try_map(|bytes| {
            as_str(bytes)
                .parse::<i64>()
                .map_err(|_| format!("number out of range: {}", as_str(bytes)))
        })
}

/// Parser that matches ASCII floating point numbers in `int.frac` form
pub fn f64<'code>() -> impl Parser<'code, Element = u8, Output = f64> {
    one_of(b"+-")
        .optional()
        .and(digits())
        .and(text("."))
        .and(digits())
        .recognize()
        .try_map(|bytes| {
            as_str(bytes)
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or("floating point overflow")
        })
}

#[derive(Debug, PartialEq)]
pub enum Number {
    I64(i64),
    F64(f64),
}

/// Parser that matches either an integer or a float and returns a Number enum
pub fn number<'code>() -> impl Parser<'code, Element = u8, Output = Number> {
    f64().map(Number::F64).or(i64().map(Number::I64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use rstest::rstest;

    #[rstest]
    #[case(b"0", 0)]
    #[case(b"123abc", 123)]
    #[case(b"18446744073709551615", u64::MAX)]
    fn test_u64(#[case] data: &[u8], #[case] expected: u64) {
        let (value, _) = u64().parse(Cursor::new(data)).unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn test_u64_overflow() {
        let data = b"18446744073709551616";
        let failure = u64().parse(Cursor::new(data)).unwrap_err();

        assert!(failure.is_recoverable());
        assert_eq!(
            failure.parse_error().unwrap().message(),
            Some("number too large: 18446744073709551616")
        );
    }

    #[test]
    fn test_u64_expects_digit() {
        let data = b"x";
        let failure = u64().parse(Cursor::new(data)).unwrap_err();
        assert_eq!(
            failure.parse_error().unwrap().expected().collect::<Vec<_>>(),
            vec!["digit"]
        );
    }

    #[rstest]
    #[case(b"42", 42)]
    #[case(b"-42", -42)]
    #[case(b"+7", 7)]
    #[case(b"-9223372036854775808", i64::MIN)]
    fn test_i64(#[case] data: &[u8], #[case] expected: i64) {
        let (value, cursor) = i64().parse(Cursor::new(data)).unwrap();
        assert_eq!(value, expected);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_i64_sign_without_digits() {
        let data = b"-x";
        let failure = i64().parse(Cursor::new(data)).unwrap_err();
        assert_eq!(failure.parse_error().unwrap().position(), 1);
    }

    #[test]
    fn test_f64() {
        let data = b"-12.25;";
        let (value, cursor) = f64().parse(Cursor::new(data)).unwrap();
        assert!((value + 12.25).abs() < f64::EPSILON);
        assert_eq!(cursor.peek(), Some(&b';'));
    }

    #[test]
    fn test_number() {
        let data = b"3.5";
        let (value, _) = number().parse(Cursor::new(data)).unwrap();
        assert_eq!(value, Number::F64(3.5));

        let data = b"35";
        let (value, _) = number().parse(Cursor::new(data)).unwrap();
        assert_eq!(value, Number::I64(35));
    }

    #[test]
    fn test_number_falls_back_to_integer() {
        let data = b"3.x";
        let (value, cursor) = number().parse(Cursor::new(data)).unwrap();
        assert_eq!(value, Number::I64(3));
        assert_eq!(cursor.position(), 1);
    }
}
