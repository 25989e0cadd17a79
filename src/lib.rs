//! Forgery Library
//!
//! Reproducible test data for Rust tests: a seeded [`Forge`] produces numbers,
//! flavored strings, strings matching a pattern, containers and custom types
//! from registered factories, and an [`Injector`] fills the declared slots of
//! test fixtures.
//!
//! # Features
//!
//! - Deterministic: the same seed and call sequence replays the same values
//! - Pattern strings: regular expression subset compiled once and cached
//! - Custom types: factories registered per type, composable with the Forge
//! - Declarative fixtures: slots with markers, inherited parents, containers
//!
//! # Crates
//!
//! - `forge_core` - random stream, character classes, type universe
//! - `forge_pattern` - pattern compiler and generator
//! - `forge_generator` - the Forge and its generators
//! - `forge_inject` - markers, slot declarations and the injector
//!
//! # Example
//!
//! ```
//! use forgery::{ForgeConfig, Forgeable, Injector, Marker, SlotSet, StringFlavor};
//!
//! #[derive(Default)]
//! struct Customer {
//!     name: String,
//!     postcode: String,
//!     age: i32,
//! }
//!
//! impl Forgeable for Customer {
//!     fn declare_slots(slots: &mut SlotSet<Self>) {
//!         slots
//!             .field("name", Marker::string(StringFlavor::Alphabetical), |c| &mut c.name)
//!             .field("postcode", Marker::pattern("[0-9]{5}"), |c| &mut c.postcode)
//!             .field("age", Marker::int_range(18, 99), |c| &mut c.age);
//!     }
//! }
//!
//! let config = ForgeConfig { seed: Some(42), ..Default::default() };
//! let mut forge = config.build().unwrap();
//! let mut customer = Customer::default();
//! Injector::new().inject(&mut forge, &mut customer, None).unwrap();
//!
//! assert_eq!(customer.postcode.len(), 5);
//! assert!((18..99).contains(&customer.age));
//! ```

pub mod config;

pub use config::{parse_seed, ForgeConfig, SEED_ENV};

// Re-export the forging crates for convenience
pub use forge_core::{
    forgery_type, Case, CharClass, ContainerKind, ForgeType, ForgedValue, Forgery, FromForged,
    RandomStream, Shape, Shaped, StringFlavor, TypeKey,
};
pub use forge_generator::{
    Forge, ForgeConfigurator, ForgeError, ForgeryFactory, GenerationConfig, NumberSpec,
    StandardFactories,
};
pub use forge_inject::{
    ErrorKind, Forgeable, InjectionError, Injector, Marker, SlotAccess, SlotInfo, SlotListener,
    SlotSet,
};
pub use forge_pattern::{compile, compile_cached, Pattern, PatternError};
