//! Seeded value forging for the forgery test data framework.
//!
//! This crate provides the [`Forge`], which produces reproducible pseudo-random
//! values: numbers in ranges or from Gaussian distributions, strings of a given
//! flavor or matching a pattern, containers, and instances of custom types
//! through registered factories. Every value is drawn from a single seeded
//! stream, so a run is replayed by reusing its seed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │            Forge             │
//! │                              │
//! │  - stream (RandomStream)     │
//! │  - factories (TypeKey → fn)  │
//! │  - config (default sizes)    │
//! └──────────────┬───────────────┘
//!                │
//!     ┌──────────┼──────────────┬──────────────┐
//!     ▼          ▼              ▼              ▼
//!  numeric    string      forge-pattern    collection
//! ```
//!
//! # Example
//!
//! ```rust
//! use forge_core::{Case, StringFlavor};
//! use forge_generator::Forge;
//!
//! let mut forge = Forge::with_seed(42);
//! let age = forge.an_int(18, 99).unwrap();
//! let code = forge.forge_string(StringFlavor::Numerical, Case::Any, Some(6));
//! let email = forge.forge_string_matching(r"[a-z]{5,10}@example\.com").unwrap();
//!
//! assert!((18..99).contains(&age));
//! assert_eq!(code.len(), 6);
//! assert!(email.ends_with("@example.com"));
//!
//! // Same seed, same calls, same values
//! let mut replay = Forge::with_seed(42);
//! assert_eq!(replay.an_int(18, 99).unwrap(), age);
//! ```

pub mod config;
pub mod error;
pub mod factories;
pub mod factory;
pub mod forge;
pub mod generators;

// Re-exports for convenience
pub use config::GenerationConfig;
pub use error::ForgeError;
pub use factories::StandardFactories;
pub use factory::{ForgeConfigurator, ForgeryFactory};
pub use forge::Forge;
pub use generators::{NumberSpec, MAX_DISTINCT_ATTEMPTS};
