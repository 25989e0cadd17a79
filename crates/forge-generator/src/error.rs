//! Error types for the Forge.

use forge_core::{TypeKey, ValueError};
use forge_pattern::PatternError;

/// Error type for forging operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForgeError {
    /// A custom type was requested but no factory is registered for it
    #[error("No factory registered for type {0}")]
    NoFactory(TypeKey),

    /// A constraint cannot be satisfied (empty range, negative deviation, ...)
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    /// Two constraints exclude each other
    #[error("Conflicting constraints: {0}")]
    ConstraintConflict(String),

    /// The pattern could not be compiled
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Not enough distinct elements could be produced for a set or map
    #[error("Only {reached} distinct elements could be forged, {requested} were requested")]
    CollectionSizeUnreachable { requested: usize, reached: usize },

    /// A forged value did not have the requested type
    #[error(transparent)]
    Value(#[from] ValueError),
}
