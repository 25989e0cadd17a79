//! Error types for injection.

use forge_core::ValueError;
use forge_generator::ForgeError;

/// Error type for injection operations.
///
/// `slot` is the qualified `Owner::name` of the slot being processed, or
/// `parameter` when resolving a standalone parameter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InjectionError {
    /// The Forge failed to produce a value
    #[error("Failed to forge {slot}: {source}")]
    Forge {
        slot: String,
        #[source]
        source: ForgeError,
    },

    /// The slot cannot be written
    #[error("Slot {slot} is read-only")]
    ImmutableSlot { slot: String },

    /// The slot's type still contains an unbound type parameter
    #[error("Slot {slot} has unresolvable generic type parameter {parameter}")]
    UnresolvableGeneric { slot: String, parameter: String },

    /// The slot's shape cannot be forged with its marker
    #[error("Slot {slot} cannot be forged as {shape}: {reason}")]
    UnsupportedShape {
        slot: String,
        shape: String,
        reason: String,
    },

    /// The marker carries constraints that exclude each other
    #[error("Conflicting constraints on {slot}: {detail}")]
    ConstraintConflict { slot: String, detail: String },

    /// The forged value could not be stored into the slot
    #[error("Cannot store forged value into {slot}: {source}")]
    TypeMismatch {
        slot: String,
        #[source]
        source: ValueError,
    },
}

/// Failure classes of [`InjectionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoFactory,
    ImmutableSlot,
    UnresolvableGeneric,
    PatternCompileError,
    ConstraintConflict,
    InvalidConstraint,
    UnsupportedShape,
    TypeMismatch,
    CollectionSize,
}

impl InjectionError {
    /// Wrap a Forge failure for `slot`.
    ///
    /// Conflicting constraints are surfaced as their own variant.
    pub fn forge(slot: impl Into<String>, source: ForgeError) -> Self {
        match source {
            ForgeError::ConstraintConflict(detail) => Self::ConstraintConflict {
                slot: slot.into(),
                detail,
            },
            source => Self::Forge {
                slot: slot.into(),
                source,
            },
        }
    }

    /// Classify the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Forge { source, .. } => match source {
                ForgeError::NoFactory(_) => ErrorKind::NoFactory,
                ForgeError::InvalidConstraint(_) => ErrorKind::InvalidConstraint,
                ForgeError::ConstraintConflict(_) => ErrorKind::ConstraintConflict,
                ForgeError::Pattern(_) => ErrorKind::PatternCompileError,
                ForgeError::CollectionSizeUnreachable { .. } => ErrorKind::CollectionSize,
                ForgeError::Value(_) => ErrorKind::TypeMismatch,
            },
            Self::ImmutableSlot { .. } => ErrorKind::ImmutableSlot,
            Self::UnresolvableGeneric { .. } => ErrorKind::UnresolvableGeneric,
            Self::UnsupportedShape { .. } => ErrorKind::UnsupportedShape,
            Self::ConstraintConflict { .. } => ErrorKind::ConstraintConflict,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    /// Qualified name of the slot that failed.
    pub fn slot(&self) -> &str {
        match self {
            Self::Forge { slot, .. }
            | Self::ImmutableSlot { slot }
            | Self::UnresolvableGeneric { slot, .. }
            | Self::UnsupportedShape { slot, .. }
            | Self::ConstraintConflict { slot, .. }
            | Self::TypeMismatch { slot, .. } => slot,
        }
    }
}
