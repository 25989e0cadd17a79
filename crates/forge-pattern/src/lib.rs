//! Regular expression driven string generation.
//!
//! Patterns use a restricted regex dialect: literals, `.`, bracketed classes
//! with ranges and negation, groups, alternation, the usual quantifiers and
//! the `\d \w \s` family of escapes. Back-references, look-around and other
//! constructs that cannot be generated from are rejected at compile time with
//! the offset of the offending construct.
//!
//! # Example
//!
//! ```rust
//! use forge_core::RandomStream;
//! use forge_pattern::compile;
//!
//! let pattern = compile(r"[A-Z]{3}-\d{4}").unwrap();
//! let mut stream = RandomStream::new(7);
//! let plate = pattern.generate(&mut stream);
//! assert_eq!(plate.len(), 8);
//! ```

pub mod ast;
pub mod cache;
pub mod error;
pub mod generator;
pub mod parser;

pub use ast::{Node, Pattern};
pub use cache::compile_cached;
pub use error::{PatternError, PatternErrorKind};
pub use generator::{generate, UNBOUNDED_REPETITION_SPAN};
pub use parser::compile;
