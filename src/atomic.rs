use std::fmt;

/// Trait for atomic elements that can be used in parsing
/// This enables generic error formatting and position calculation
///
/// Bytes and chars are textual: diagnostics report line and column for them.
/// Token types usually only need an empty impl:
///
/// ```
/// use pint::Atomic;
///
/// #[derive(Debug, PartialEq)]
/// enum Token {
///     Ident(String),
///     Comma,
/// }
///
/// impl Atomic for Token {}
/// ```
pub trait Atomic: Sized + PartialEq + fmt::Debug {
    /// Inputs of this element type are text
    const TEXT: bool = false;

    /// Whether this element terminates a line
    fn is_newline(&self) -> bool {
        false
    }

    /// Convert a slice of elements to a displayable string for error reporting
    fn format_slice(slice: &[Self]) -> String {
        slice
            .iter()
            .map(|element| format!("{:?}", element))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Atomic for u8 {
    const TEXT: bool = true;

    fn is_newline(&self) -> bool {
        *self == b'\n'
    }

    fn format_slice(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).into_owned()
    }
}

impl Atomic for char {
    const TEXT: bool = true;

    fn is_newline(&self) -> bool {
        *self == '\n'
    }

    fn format_slice(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

/// Render a sequence of elements as an expectation label
///
/// Text is quoted (`"if"`), tokens are listed as they are.
pub fn describe<T: Atomic>(slice: &[T]) -> String {
    if T::TEXT {
        format!("{:?}", T::format_slice(slice))
    } else {
        T::format_slice(slice)
    }
}
