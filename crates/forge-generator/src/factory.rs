//! Factory registry types.
//!
//! A factory forges instances of one custom type. Factories are stored
//! type-erased behind [`ErasedFactory`], keyed by the [`TypeKey`] of the type
//! they produce.
//!
//! [`TypeKey`]: forge_core::TypeKey

use crate::error::ForgeError;
use crate::forge::Forge;
use forge_core::ForgedValue;
use std::any::Any;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Produces instances of `T` from a Forge.
///
/// Factories receive the Forge itself so they can draw from the shared stream
/// and compose other forgeries. Closures `Fn(&mut Forge) -> Result<T, ForgeError>`
/// are factories.
pub trait ForgeryFactory<T>: Send + Sync {
    /// Forge a new instance.
    fn forge(&self, forge: &mut Forge) -> Result<T, ForgeError>;
}

impl<T, F> ForgeryFactory<T> for F
where
    F: Fn(&mut Forge) -> Result<T, ForgeError> + Send + Sync,
{
    fn forge(&self, forge: &mut Forge) -> Result<T, ForgeError> {
        self(forge)
    }
}

/// Type-erased factory wrapper.
pub(crate) trait ErasedFactory: Send + Sync {
    /// Forge a value wrapped as a custom forgery.
    fn forge_value(&self, forge: &mut Forge) -> Result<ForgedValue, ForgeError>;
}

/// Wrapper to store factories with type information.
pub(crate) struct TypedFactory<T, F> {
    factory: F,
    _produces: PhantomData<fn() -> T>,
}

impl<T, F> TypedFactory<T, F> {
    pub(crate) fn new(factory: F) -> Self {
        Self {
            factory,
            _produces: PhantomData,
        }
    }
}

impl<T, F> ErasedFactory for TypedFactory<T, F>
where
    T: Any + Debug + PartialEq,
    F: ForgeryFactory<T>,
{
    fn forge_value(&self, forge: &mut Forge) -> Result<ForgedValue, ForgeError> {
        self.factory.forge(forge).map(ForgedValue::custom)
    }
}

/// Batches factory registrations.
///
/// ```rust
/// use forge_generator::{Forge, ForgeConfigurator, ForgeError};
///
/// #[derive(Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// struct Geometry;
///
/// impl ForgeConfigurator for Geometry {
///     fn configure(&self, forge: &mut Forge) {
///         forge.register_factory::<Point, _>(|forge: &mut Forge| -> Result<Point, ForgeError> {
///             Ok(Point { x: forge.an_int(-10, 10)?, y: forge.an_int(-10, 10)? })
///         });
///     }
/// }
///
/// let mut forge = Forge::with_seed(1);
/// forge.apply(&Geometry);
/// let point: Point = forge.forgery().unwrap();
/// assert!((-10..10).contains(&point.x));
/// ```
pub trait ForgeConfigurator {
    /// Register factories (or otherwise prepare) the given Forge.
    fn configure(&self, forge: &mut Forge);
}

impl<F> ForgeConfigurator for F
where
    F: Fn(&mut Forge),
{
    fn configure(&self, forge: &mut Forge) {
        self(forge)
    }
}
