//! Markers describing how a slot should be forged.
//!
//! Markers are plain data, so fixtures can declare them in code or load them
//! from YAML:
//!
//! ```yaml
//! type: int
//! min: 0
//! max: 100
//! ```

use forge_core::{Case, StringFlavor};
use serde::{Deserialize, Serialize};

fn default_probability() -> f64 {
    0.5
}

/// How a slot is filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Marker {
    /// Any value of the slot's type: built-in generators for scalars, the
    /// factory registry for custom types.
    Forgery,

    /// Boolean that is `true` with the given probability
    Bool {
        #[serde(default = "default_probability")]
        probability: f64,
    },

    /// 32-bit integer, either ranged (`min..max`) or Gaussian
    Int {
        #[serde(default)]
        min: Option<i32>,
        #[serde(default)]
        max: Option<i32>,
        #[serde(default)]
        mean: Option<i32>,
        #[serde(default)]
        standard_deviation: Option<i32>,
    },

    /// 64-bit integer, either ranged (`min..max`) or Gaussian
    Long {
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
        #[serde(default)]
        mean: Option<i64>,
        #[serde(default)]
        standard_deviation: Option<i64>,
    },

    /// 32-bit float, either ranged (`min..=max`) or Gaussian
    Float {
        #[serde(default)]
        min: Option<f32>,
        #[serde(default)]
        max: Option<f32>,
        #[serde(default)]
        mean: Option<f32>,
        #[serde(default)]
        standard_deviation: Option<f32>,
    },

    /// 64-bit float, either ranged (`min..=max`) or Gaussian
    Double {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
        #[serde(default)]
        mean: Option<f64>,
        #[serde(default)]
        standard_deviation: Option<f64>,
    },

    /// String drawn from a character flavor
    String {
        flavor: StringFlavor,
        #[serde(default)]
        case: Case,
        #[serde(default)]
        size: Option<usize>,
    },

    /// String matching a regular expression
    Pattern { pattern: String },

    /// Map whose keys and values follow their own markers
    Map { key: Box<Marker>, value: Box<Marker> },

    /// One alternative picked uniformly per generated value
    OneOf { alternatives: Vec<Marker> },

    /// Marker owned by another framework; the slot is left alone
    Foreign { system: String },
}

impl Marker {
    /// Integer in `min..max`.
    pub fn int_range(min: i32, max: i32) -> Self {
        Self::Int {
            min: Some(min),
            max: Some(max),
            mean: None,
            standard_deviation: None,
        }
    }

    /// Gaussian integer.
    pub fn int_gaussian(mean: i32, standard_deviation: i32) -> Self {
        Self::Int {
            min: None,
            max: None,
            mean: Some(mean),
            standard_deviation: Some(standard_deviation),
        }
    }

    /// Long in `min..max`.
    pub fn long_range(min: i64, max: i64) -> Self {
        Self::Long {
            min: Some(min),
            max: Some(max),
            mean: None,
            standard_deviation: None,
        }
    }

    /// Double in `min..=max`.
    pub fn double_range(min: f64, max: f64) -> Self {
        Self::Double {
            min: Some(min),
            max: Some(max),
            mean: None,
            standard_deviation: None,
        }
    }

    /// Flavored string of default size.
    pub fn string(flavor: StringFlavor) -> Self {
        Self::String {
            flavor,
            case: Case::Any,
            size: None,
        }
    }

    /// Flavored string of a fixed size.
    pub fn sized_string(flavor: StringFlavor, size: usize) -> Self {
        Self::String {
            flavor,
            case: Case::Any,
            size: Some(size),
        }
    }

    /// String matching `pattern`.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
        }
    }

    /// Map with per-side markers.
    pub fn map(key: Marker, value: Marker) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Uniform pick among `alternatives`.
    pub fn one_of(alternatives: Vec<Marker>) -> Self {
        Self::OneOf { alternatives }
    }

    /// Marker of another framework.
    pub fn foreign(system: impl Into<String>) -> Self {
        Self::Foreign {
            system: system.into(),
        }
    }

    /// Whether the injector leaves slots with this marker untouched.
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::Foreign { .. })
    }

    /// Marker name as written in YAML.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forgery => "forgery",
            Self::Bool { .. } => "bool",
            Self::Int { .. } => "int",
            Self::Long { .. } => "long",
            Self::Float { .. } => "float",
            Self::Double { .. } => "double",
            Self::String { .. } => "string",
            Self::Pattern { .. } => "pattern",
            Self::Map { .. } => "map",
            Self::OneOf { .. } => "one_of",
            Self::Foreign { .. } => "foreign",
        }
    }
}
