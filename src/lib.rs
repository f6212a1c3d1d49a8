//! # pint - Parser Combinators
//!
//! Small parsers over a slice of elements combine into grammars. Input can be
//! bytes, chars, or any token type that implements [`Atomic`].
//!
//! A parser fails in one of three ways:
//!
//! - **Recoverable**: the input did not match, alternatives may be tried
//! - **Committed**: the input did not match past a [`cut`](cut::cut), the
//!   enclosing alternation must not backtrack
//! - **Fatal**: the grammar itself is broken (a loop that consumes nothing,
//!   a recursion limit), the run aborts
//!
//! When alternatives all fail, the error that got furthest into the input is
//! reported, together with everything that was expected there.
//!
//! ```
//! use pint::ascii::{lexeme, u64};
//! use pint::literal::text;
//! use pint::prelude::*;
//! use pint::run;
//!
//! let list = lexeme(text("["))
//!     .ignore_then(lexeme(u64()).separated_by(lexeme(text(","))))
//!     .then_ignore(text("]"));
//!
//! assert_eq!(run(&list, "[1, 2, 3]").unwrap(), vec![1, 2, 3]);
//! assert!(run(&list, "[1, 2,]").is_err());
//! ```

pub mod and;
pub mod and_then;
pub mod ascii;
pub mod atomic;
pub mod between;
pub mod config;
pub mod cursor;
pub mod cut;
pub mod error;
pub mod filter;
pub mod label;
pub mod lazy;
pub mod literal;
pub mod lookahead;
pub mod many;
pub mod map;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod primitive;
pub mod pure;
pub mod repeat;
pub mod run;
pub mod separated_list;
pub mod take_until;
pub mod utf8;

pub use atomic::Atomic;
pub use config::RunConfig;
pub use cursor::Cursor;
pub use error::{CodeLoc, Failure, GrammarError, ParseError};
pub use parser::{BoxedParser, Hint, HintedResult, ParseResult, Parser, boxed, from_fn};
pub use position::Span;
pub use run::{RunError, run, run_prefix, run_prefix_with_config, run_with_config};

/// Extension traits that put the combinators on every parser
pub mod prelude {
    pub use crate::and::AndExt;
    pub use crate::and_then::AndThenExt;
    pub use crate::cut::CutExt;
    pub use crate::filter::FilterExt;
    pub use crate::label::LabelExt;
    pub use crate::lookahead::LookaheadExt;
    pub use crate::many::ManyExt;
    pub use crate::map::MapExt;
    pub use crate::not::NotExt;
    pub use crate::optional::OptionalExt;
    pub use crate::or::OrExt;
    pub use crate::parser::Parser;
    pub use crate::position::PositionExt;
    pub use crate::repeat::RepeatExt;
    pub use crate::separated_list::SeparatedListExt;
}
