//! Individual value generators for the different kinds of forgeries.
//!
//! Scalar generators draw from a [`RandomStream`](forge_core::RandomStream);
//! container generators take the whole [`Forge`](crate::Forge) so their
//! element generators can use any forging operation.

pub mod collection;
pub mod numeric;
pub mod string;

pub use collection::{
    generate_distinct, generate_entries, generate_list, generate_map, generate_set,
    MAX_DISTINCT_ATTEMPTS,
};
pub use numeric::{
    generate_double, generate_float, generate_int, generate_long, Bounded, NumberSpec,
    DEFAULT_INT_STANDARD_DEVIATION,
};
pub use string::{default_char_class, flavor_class, generate_from_class, generate_string};
