//! Core types for the forgery test data framework.
//!
//! This crate provides the foundational types used across the framework,
//! including:
//!
//! - [`RandomStream`] - The seeded random source every generator draws from
//! - [`CharClass`] - Character sets used by string flavors and patterns
//! - [`ForgeType`] / [`Shape`] - The type universe and slot shapes
//! - [`ForgedValue`] - Dynamic values produced before conversion to a slot type
//!
//! # Architecture
//!
//! ```text
//! forge-core (this crate)
//!    │
//!    ├─── forge-pattern    (compiles and generates from regex patterns)
//!    │
//!    ├─── forge-generator  (the Forge: numbers, strings, containers, factories)
//!    │
//!    └─── forge-inject     (fills marked slots of user types)
//! ```
//!
//! # Example
//!
//! ```rust
//! use forge_core::{CharClass, RandomStream};
//!
//! let mut stream = RandomStream::new(42);
//! let c = CharClass::digit().pick(&mut stream).unwrap();
//! assert!(c.is_ascii_digit());
//! ```

pub mod charset;
pub mod random;
pub mod types;
pub mod values;

pub use charset::CharClass;
pub use random::RandomStream;
pub use types::{Case, ContainerKind, ForgeType, Shape, StringFlavor, TypeKey};
pub use values::{container_of, ForgedValue, Forgery, FromForged, Shaped, ValueError};
