//! Error types for pattern compilation.

use thiserror::Error;

/// Construct that made a pattern uncompilable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternErrorKind {
    #[error("unexpected end of pattern")]
    UnexpectedEnd,

    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,

    #[error("quantifier has nothing to repeat")]
    NothingToRepeat,

    #[error("invalid repetition bounds")]
    InvalidRepetition,

    #[error("invalid character range")]
    InvalidRange,

    #[error("character class matches nothing printable")]
    EmptyClass,

    #[error("unsupported escape sequence")]
    UnsupportedEscape,

    #[error("back-references are not supported")]
    BackReference,

    #[error("look-around assertions are not supported")]
    LookAround,

    #[error("unterminated character class")]
    UnterminatedClass,

    #[error("anchor in the middle of a branch")]
    MisplacedAnchor,

    #[error("unsupported construct")]
    UnsupportedConstruct,
}

/// Failure to compile a pattern, with the character offset of the culprit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid pattern '{pattern}' at offset {position}: {kind}")]
pub struct PatternError {
    pub pattern: String,
    pub position: usize,
    pub kind: PatternErrorKind,
}
