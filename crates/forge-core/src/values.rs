//! Value representations produced by the Forge.
//!
//! `ForgedValue` is the dynamic, type-tagged value the generators produce when
//! the target type is only known through a [`Shape`]. It is converted into the
//! concrete Rust type of a slot through [`FromForged`].

use crate::types::{ContainerKind, ForgeType, Shape, TypeKey};
use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

/// Error raised when a forged value does not fit the requested type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// The value has a different type than the slot
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
}

impl ValueError {
    fn mismatch(expected: impl Into<String>, found: &ForgedValue) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.type_name(),
        }
    }
}

trait ErasedForgery: Any + fmt::Debug {
    fn eq_dyn(&self, other: &dyn Any) -> bool;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any + fmt::Debug + PartialEq> ErasedForgery for T {
    fn eq_dyn(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// An instance of a custom type produced by a registered factory.
///
/// The concrete value is type-erased; it keeps its `TypeKey` so conversions can
/// report what they found, and compares by the value's own `PartialEq` so
/// sets and maps of custom types can detect duplicates.
pub struct Forgery {
    type_key: TypeKey,
    value: Box<dyn ErasedForgery>,
}

impl Forgery {
    /// Wrap a custom value.
    pub fn new<T: Any + fmt::Debug + PartialEq>(value: T) -> Self {
        Self {
            type_key: TypeKey::of::<T>(),
            value: Box::new(value),
        }
    }

    /// The key of the wrapped type.
    pub fn type_key(&self) -> TypeKey {
        self.type_key
    }

    /// Borrow the value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).as_any().downcast_ref::<T>()
    }

    /// Take the value out if it is a `T`; on failure returns the key of the
    /// type actually held.
    pub fn downcast<T: Any>(self) -> Result<T, TypeKey> {
        let type_key = self.type_key;
        self.value
            .into_any()
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| type_key)
    }
}

impl PartialEq for Forgery {
    fn eq(&self, other: &Self) -> bool {
        self.type_key == other.type_key && self.value.eq_dyn((*other.value).as_any())
    }
}

impl fmt::Debug for Forgery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.value, f)
    }
}

/// Dynamic value produced by the Forge.
#[derive(Debug, PartialEq)]
pub enum ForgedValue {
    /// Boolean value
    Bool(bool),

    /// 32-bit signed integer
    Int(i32),

    /// 64-bit signed integer
    Long(i64),

    /// 32-bit floating point
    Float(f32),

    /// 64-bit floating point
    Double(f64),

    /// Single character
    Char(char),

    /// String value
    String(String),

    /// Ordered elements (lists and generic collections)
    List(Vec<ForgedValue>),

    /// Distinct elements
    Set(Vec<ForgedValue>),

    /// Entries with distinct keys, in generation order
    Map(Vec<(ForgedValue, ForgedValue)>),

    /// Instance of a custom type
    Custom(Forgery),
}

impl ForgedValue {
    /// Wrap a custom value.
    pub fn custom<T: Any + fmt::Debug + PartialEq>(value: T) -> Self {
        Self::Custom(Forgery::new(value))
    }

    /// Name of the value's type, for error messages.
    pub fn type_name(&self) -> String {
        match self {
            Self::Bool(_) => "bool".to_string(),
            Self::Int(_) => "i32".to_string(),
            Self::Long(_) => "i64".to_string(),
            Self::Float(_) => "f32".to_string(),
            Self::Double(_) => "f64".to_string(),
            Self::Char(_) => "char".to_string(),
            Self::String(_) => "String".to_string(),
            Self::List(_) => "list".to_string(),
            Self::Set(_) => "set".to_string(),
            Self::Map(_) => "map".to_string(),
            Self::Custom(forgery) => forgery.type_key().name().to_string(),
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Long(i) => Some(*i),
            Self::Int(i) => Some(i64::from(*i)),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(f) => Some(*f),
            Self::Float(f) => Some(f64::from(*f)),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to borrow the custom value as a `T`.
    pub fn as_custom<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Custom(forgery) => forgery.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Elements of a list or set, entries excluded.
    pub fn elements(&self) -> Option<&[ForgedValue]> {
        match self {
            Self::List(items) | Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Convert a scalar into the concrete type `T`.
    ///
    /// Containers are rejected: use [`FromForged`] to convert them.
    pub fn into_scalar<T: Any>(self) -> Result<T, ValueError> {
        let expected = ForgeType::of::<T>().name();
        let found = self.type_name();
        let boxed: Box<dyn Any> = match self {
            Self::Bool(v) => Box::new(v),
            Self::Int(v) => Box::new(v),
            Self::Long(v) => Box::new(v),
            Self::Float(v) => Box::new(v),
            Self::Double(v) => Box::new(v),
            Self::Char(v) => Box::new(v),
            Self::String(v) => Box::new(v),
            Self::Custom(forgery) => {
                return forgery.downcast::<T>().map_err(|key| ValueError::TypeMismatch {
                    expected: expected.to_string(),
                    found: key.name().to_string(),
                });
            }
            Self::List(_) | Self::Set(_) | Self::Map(_) => {
                return Err(ValueError::TypeMismatch {
                    expected: expected.to_string(),
                    found,
                })
            }
        };
        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| ValueError::TypeMismatch {
                expected: expected.to_string(),
                found,
            })
    }
}

/// Conversion from a dynamic [`ForgedValue`] into a slot's concrete type.
pub trait FromForged: Sized {
    /// Convert, failing when the value does not have the expected shape.
    fn from_forged(value: ForgedValue) -> Result<Self, ValueError>;
}

/// Compile-time description of a type's [`Shape`].
///
/// Implemented for the built-in scalars and the standard containers; custom
/// types get it through [`forgery_type!`](crate::forgery_type).
pub trait Shaped {
    /// The declared shape of `Self`.
    fn shape() -> Shape;
}

macro_rules! builtin_scalar {
    ($($ty:ty => $variant:ident, $forge_type:ident;)+) => {$(
        impl FromForged for $ty {
            fn from_forged(value: ForgedValue) -> Result<Self, ValueError> {
                match value {
                    ForgedValue::$variant(v) => Ok(v),
                    other => Err(ValueError::mismatch(stringify!($ty), &other)),
                }
            }
        }

        impl Shaped for $ty {
            fn shape() -> Shape {
                Shape::Scalar(ForgeType::$forge_type)
            }
        }
    )+};
}

builtin_scalar! {
    bool => Bool, Bool;
    i32 => Int, Int32;
    i64 => Long, Int64;
    f32 => Float, Float32;
    f64 => Double, Float64;
    char => Char, Char;
    String => String, Text;
}

fn convert_elements<T: FromForged>(items: Vec<ForgedValue>) -> Result<Vec<T>, ValueError> {
    items.into_iter().map(T::from_forged).collect()
}

fn convert_entries<K: FromForged, V: FromForged>(
    entries: Vec<(ForgedValue, ForgedValue)>,
) -> Result<Vec<(K, V)>, ValueError> {
    entries
        .into_iter()
        .map(|(k, v)| Ok((K::from_forged(k)?, V::from_forged(v)?)))
        .collect()
}

impl<T: FromForged> FromForged for Vec<T> {
    fn from_forged(value: ForgedValue) -> Result<Self, ValueError> {
        match value {
            ForgedValue::List(items) | ForgedValue::Set(items) => convert_elements(items),
            other => Err(ValueError::mismatch("list", &other)),
        }
    }
}

impl<T: Shaped> Shaped for Vec<T> {
    fn shape() -> Shape {
        Shape::list(T::shape())
    }
}

impl<T: FromForged> FromForged for VecDeque<T> {
    fn from_forged(value: ForgedValue) -> Result<Self, ValueError> {
        match value {
            ForgedValue::List(items) => Ok(convert_elements(items)?.into()),
            other => Err(ValueError::mismatch("collection", &other)),
        }
    }
}

impl<T: Shaped> Shaped for VecDeque<T> {
    fn shape() -> Shape {
        Shape::collection(T::shape())
    }
}

impl<T: FromForged + Eq + Hash> FromForged for HashSet<T> {
    fn from_forged(value: ForgedValue) -> Result<Self, ValueError> {
        match value {
            ForgedValue::Set(items) => Ok(convert_elements(items)?.into_iter().collect()),
            other => Err(ValueError::mismatch("set", &other)),
        }
    }
}

impl<T: Shaped> Shaped for HashSet<T> {
    fn shape() -> Shape {
        Shape::set(T::shape())
    }
}

impl<T: FromForged + Ord> FromForged for BTreeSet<T> {
    fn from_forged(value: ForgedValue) -> Result<Self, ValueError> {
        match value {
            ForgedValue::Set(items) => Ok(convert_elements(items)?.into_iter().collect()),
            other => Err(ValueError::mismatch("set", &other)),
        }
    }
}

impl<T: Shaped> Shaped for BTreeSet<T> {
    fn shape() -> Shape {
        Shape::set(T::shape())
    }
}

impl<K: FromForged + Eq + Hash, V: FromForged> FromForged for HashMap<K, V> {
    fn from_forged(value: ForgedValue) -> Result<Self, ValueError> {
        match value {
            ForgedValue::Map(entries) => Ok(convert_entries(entries)?.into_iter().collect()),
            other => Err(ValueError::mismatch("map", &other)),
        }
    }
}

impl<K: Shaped, V: Shaped> Shaped for HashMap<K, V> {
    fn shape() -> Shape {
        Shape::map(K::shape(), V::shape())
    }
}

impl<K: FromForged + Ord, V: FromForged> FromForged for BTreeMap<K, V> {
    fn from_forged(value: ForgedValue) -> Result<Self, ValueError> {
        match value {
            ForgedValue::Map(entries) => Ok(convert_entries(entries)?.into_iter().collect()),
            other => Err(ValueError::mismatch("map", &other)),
        }
    }
}

impl<K: Shaped, V: Shaped> Shaped for BTreeMap<K, V> {
    fn shape() -> Shape {
        Shape::map(K::shape(), V::shape())
    }
}

/// Shape of a single-element container holding `T`.
pub fn container_of<T: Shaped>(kind: ContainerKind) -> Shape {
    Shape::single(kind, T::shape())
}

/// Implement [`FromForged`] and [`Shaped`] for custom types forged by a
/// registered factory.
///
/// ```rust
/// use forge_core::{forgery_type, ForgedValue, FromForged, Shaped};
///
/// #[derive(Debug, PartialEq)]
/// struct Account { id: i64 }
///
/// forgery_type!(Account);
///
/// let value = ForgedValue::custom(Account { id: 7 });
/// assert_eq!(Account::from_forged(value).unwrap(), Account { id: 7 });
/// assert!(Account::shape().is_scalar());
/// ```
#[macro_export]
macro_rules! forgery_type {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::FromForged for $ty {
            fn from_forged(
                value: $crate::ForgedValue,
            ) -> ::std::result::Result<Self, $crate::ValueError> {
                value.into_scalar::<$ty>()
            }
        }

        impl $crate::Shaped for $ty {
            fn shape() -> $crate::Shape {
                $crate::Shape::Scalar($crate::ForgeType::Custom($crate::TypeKey::of::<$ty>()))
            }
        }
    )+};
}

crate::forgery_type!(uuid::Uuid, chrono::DateTime<chrono::Utc>);
