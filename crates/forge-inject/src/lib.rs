//! # forge-inject
//!
//! Declarative injection of forged values into test fixtures.
//!
//! A fixture implements [`Forgeable`] to list its slots: each slot has a
//! [`Marker`] saying how to forge it and an accessor used to store the value.
//! The [`Injector`] walks the slots, resolves their shapes, asks the
//! [`Forge`](forge_generator::Forge) for values and commits them.
//!
//! ```text
//! ┌───────────────┐    ┌─────────────┐    ┌────────────┐    ┌──────────────┐
//! │ declare_slots │───▶│ resolve     │───▶│ plan       │───▶│ Forge        │
//! │ (SlotSet)     │    │ shape       │    │ marker     │    │ + setter     │
//! └───────────────┘    └─────────────┘    └────────────┘    └──────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use forge_generator::Forge;
//! use forge_inject::{Forgeable, Injector, Marker, SlotSet};
//!
//! #[derive(Default)]
//! struct Order {
//!     quantity: i32,
//!     reference: String,
//! }
//!
//! impl Forgeable for Order {
//!     fn declare_slots(slots: &mut SlotSet<Self>) {
//!         slots
//!             .field("quantity", Marker::int_range(1, 100), |o| &mut o.quantity)
//!             .field("reference", Marker::pattern("ORD-[0-9]{6}"), |o| &mut o.reference);
//!     }
//! }
//!
//! let mut forge = Forge::with_seed(7);
//! let mut order = Order::default();
//! Injector::new().inject(&mut forge, &mut order, None).unwrap();
//!
//! assert!((1..100).contains(&order.quantity));
//! assert!(order.reference.starts_with("ORD-"));
//! ```

mod dispatch;
pub mod error;
pub mod injector;
pub mod marker;
pub mod shape;
pub mod slot;

pub use error::{ErrorKind, InjectionError};
pub use injector::{Injector, SlotListener};
pub use marker::Marker;
pub use shape::{resolve_shape, ResolvedShape, ShapeError};
pub use slot::{Forgeable, SlotAccess, SlotInfo, SlotSet};
