//! Type universe for forged values.
//!
//! This module defines `ForgeType`, the set of scalar types the framework
//! knows how to forge, and `Shape`, the scalar / container / key-value
//! description of a slot's declared type.

use serde::{Deserialize, Serialize};
use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable identifier for a Rust type, used as the factory registry key.
///
/// Equality and hashing only consider the `TypeId`; the name is kept for
/// error messages and logs.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// The key for type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The underlying `TypeId`.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Scalar types understood by the Forge.
///
/// Every variant except `Custom` has a built-in generator. `Custom` types are
/// forged by a factory registered for their `TypeKey`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForgeType {
    /// `bool`
    Bool,

    /// `i32`
    Int32,

    /// `i64`
    Int64,

    /// `f32`
    Float32,

    /// `f64`
    Float64,

    /// `char`
    Char,

    /// `String`
    Text,

    /// Any other type, forged through the factory registry
    Custom(TypeKey),
}

impl ForgeType {
    /// Map a Rust type onto the type universe.
    pub fn of<T: 'static>() -> Self {
        let id = TypeId::of::<T>();
        if id == TypeId::of::<bool>() {
            Self::Bool
        } else if id == TypeId::of::<i32>() {
            Self::Int32
        } else if id == TypeId::of::<i64>() {
            Self::Int64
        } else if id == TypeId::of::<f32>() {
            Self::Float32
        } else if id == TypeId::of::<f64>() {
            Self::Float64
        } else if id == TypeId::of::<char>() {
            Self::Char
        } else if id == TypeId::of::<String>() {
            Self::Text
        } else {
            Self::Custom(TypeKey::of::<T>())
        }
    }

    /// Whether the Forge can produce this type without a factory.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Check if this type is one of the numeric types.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int32 | Self::Int64 | Self::Float32 | Self::Float64
        )
    }

    /// Short human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Char => "char",
            Self::Text => "String",
            Self::Custom(key) => key.name(),
        }
    }
}

impl fmt::Display for ForgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Container families a slot can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Ordered, duplicates allowed
    List,
    /// Unordered, duplicates collapsed
    Set,
    /// Key to value, keys unique
    Map,
    /// Generic sequence, generated like a list
    Collection,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
            Self::Collection => "collection",
        })
    }
}

/// Declared shape of a slot.
///
/// Nested containers are described recursively, e.g. a `Vec<HashSet<Foo>>`
/// is `Single { List, Single { Set, Scalar(Custom(Foo)) } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A single value of the given type
    Scalar(ForgeType),

    /// A container of one element type
    Single {
        /// Container family
        kind: ContainerKind,
        /// Element shape
        element: Box<Shape>,
    },

    /// A key/value container
    KeyValue {
        /// Container family
        kind: ContainerKind,
        /// Key shape
        key: Box<Shape>,
        /// Value shape
        value: Box<Shape>,
    },

    /// A type parameter with no concrete binding
    Parameter(&'static str),
}

impl Shape {
    /// Scalar shape of the given type.
    pub fn scalar(ty: ForgeType) -> Self {
        Self::Scalar(ty)
    }

    /// List of `element`.
    pub fn list(element: Shape) -> Self {
        Self::single(ContainerKind::List, element)
    }

    /// Set of `element`.
    pub fn set(element: Shape) -> Self {
        Self::single(ContainerKind::Set, element)
    }

    /// Generic collection of `element`.
    pub fn collection(element: Shape) -> Self {
        Self::single(ContainerKind::Collection, element)
    }

    /// Single-element container of the given kind.
    pub fn single(kind: ContainerKind, element: Shape) -> Self {
        Self::Single {
            kind,
            element: Box::new(element),
        }
    }

    /// Map from `key` to `value`.
    pub fn map(key: Shape, value: Shape) -> Self {
        Self::KeyValue {
            kind: ContainerKind::Map,
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Unbound type parameter.
    pub fn parameter(name: &'static str) -> Self {
        Self::Parameter(name)
    }

    /// Whether this is a scalar shape.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(ty) => write!(f, "{ty}"),
            Self::Single { kind, element } => write!(f, "{kind}<{element}>"),
            Self::KeyValue { kind, key, value } => write!(f, "{kind}<{key}, {value}>"),
            Self::Parameter(name) => f.write_str(name),
        }
    }
}

/// Character family of a forged string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringFlavor {
    /// Printable ASCII characters
    Ascii,
    /// Printable ASCII and printable Latin-1 characters
    AsciiExtended,
    /// Letters of the latin alphabet
    Alphabetical,
    /// Letters and digits
    AlphaNumerical,
    /// Hexadecimal digits
    Hexadecimal,
    /// Decimal digits
    Numerical,
    /// Whitespace characters
    Whitespace,
}

/// Letter case applied to flavors that contain letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    /// Upper case only
    Upper,
    /// Lower case only
    Lower,
    /// Either case
    #[default]
    Any,
}
