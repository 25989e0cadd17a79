//! Marker dispatch.
//!
//! A marker and a resolved shape are first combined into a `Recipe`. Planning
//! catches every marker/shape mismatch before the stream is touched, so the
//! generation pass only fails with Forge errors.

use crate::error::InjectionError;
use crate::marker::Marker;
use crate::shape::ResolvedShape;
use forge_core::{Case, ContainerKind, ForgeType, ForgedValue, StringFlavor};
use forge_generator::{Forge, ForgeError, NumberSpec};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Recipe {
    Scalar(ForgeType),
    Bool(f64),
    Int(NumberSpec<i32>),
    Long(NumberSpec<i64>),
    Float(NumberSpec<f32>),
    Double(NumberSpec<f64>),
    Text {
        flavor: StringFlavor,
        case: Case,
        size: Option<usize>,
    },
    Pattern(String),
    OneOf(Vec<Recipe>),
    List(Box<Recipe>),
    Set(Box<Recipe>),
    Map {
        key: Box<Recipe>,
        value: Box<Recipe>,
    },
}

/// Combine `marker` with `shape`, failing on any incompatibility.
pub(crate) fn plan(
    marker: &Marker,
    shape: &ResolvedShape,
    slot: &str,
) -> Result<Recipe, InjectionError> {
    match shape {
        ResolvedShape::Single { kind, element } => {
            if matches!(marker, Marker::Map { .. }) {
                return Err(unsupported(slot, shape, marker));
            }
            let element = Box::new(plan(marker, element, slot)?);
            Ok(match kind {
                ContainerKind::Set => Recipe::Set(element),
                _ => Recipe::List(element),
            })
        }
        ResolvedShape::KeyValue { key, value } => match marker {
            Marker::Forgery => Ok(Recipe::Map {
                key: Box::new(plan(marker, key, slot)?),
                value: Box::new(plan(marker, value, slot)?),
            }),
            Marker::Map {
                key: key_marker,
                value: value_marker,
            } => Ok(Recipe::Map {
                key: Box::new(plan(key_marker, key, slot)?),
                value: Box::new(plan(value_marker, value, slot)?),
            }),
            _ => Err(unsupported(slot, shape, marker)),
        },
        ResolvedShape::Scalar(ty) => plan_scalar(marker, *ty, shape, slot),
    }
}

fn plan_scalar(
    marker: &Marker,
    ty: ForgeType,
    shape: &ResolvedShape,
    slot: &str,
) -> Result<Recipe, InjectionError> {
    let expect = |wanted: ForgeType| {
        if ty == wanted {
            Ok(())
        } else {
            Err(unsupported(slot, shape, marker))
        }
    };
    let spec_error = |e: ForgeError| InjectionError::forge(slot, e);

    match marker {
        Marker::Forgery => Ok(Recipe::Scalar(ty)),
        Marker::Bool { probability } => {
            expect(ForgeType::Bool)?;
            Ok(Recipe::Bool(*probability))
        }
        Marker::Int {
            min,
            max,
            mean,
            standard_deviation,
        } => {
            expect(ForgeType::Int32)?;
            NumberSpec::from_parts(*min, *max, *mean, *standard_deviation)
                .map(Recipe::Int)
                .map_err(spec_error)
        }
        Marker::Long {
            min,
            max,
            mean,
            standard_deviation,
        } => {
            expect(ForgeType::Int64)?;
            NumberSpec::from_parts(*min, *max, *mean, *standard_deviation)
                .map(Recipe::Long)
                .map_err(spec_error)
        }
        Marker::Float {
            min,
            max,
            mean,
            standard_deviation,
        } => {
            expect(ForgeType::Float32)?;
            NumberSpec::from_parts(*min, *max, *mean, *standard_deviation)
                .map(Recipe::Float)
                .map_err(spec_error)
        }
        Marker::Double {
            min,
            max,
            mean,
            standard_deviation,
        } => {
            expect(ForgeType::Float64)?;
            NumberSpec::from_parts(*min, *max, *mean, *standard_deviation)
                .map(Recipe::Double)
                .map_err(spec_error)
        }
        Marker::String { flavor, case, size } => {
            expect(ForgeType::Text)?;
            Ok(Recipe::Text {
                flavor: *flavor,
                case: *case,
                size: *size,
            })
        }
        Marker::Pattern { pattern } => {
            expect(ForgeType::Text)?;
            Ok(Recipe::Pattern(pattern.clone()))
        }
        Marker::OneOf { alternatives } => {
            if alternatives.is_empty() {
                return Err(spec_error(ForgeError::InvalidConstraint(
                    "one_of needs at least one alternative".to_string(),
                )));
            }
            alternatives
                .iter()
                .map(|alternative| plan(alternative, shape, slot))
                .collect::<Result<Vec<_>, _>>()
                .map(Recipe::OneOf)
        }
        Marker::Map { .. } | Marker::Foreign { .. } => Err(unsupported(slot, shape, marker)),
    }
}

fn unsupported(slot: &str, shape: &ResolvedShape, marker: &Marker) -> InjectionError {
    InjectionError::UnsupportedShape {
        slot: slot.to_string(),
        shape: shape.to_string(),
        reason: format!("marker '{}' does not apply", marker.name()),
    }
}

/// Forge one value following `recipe`.
pub(crate) fn forge_recipe(forge: &mut Forge, recipe: &Recipe) -> Result<ForgedValue, ForgeError> {
    match recipe {
        Recipe::Scalar(ty) => forge.forge_scalar(ty),
        Recipe::Bool(probability) => Ok(ForgedValue::Bool(forge.a_bool(*probability))),
        Recipe::Int(spec) => forge.forge_int(*spec).map(ForgedValue::Int),
        Recipe::Long(spec) => forge.forge_long(*spec).map(ForgedValue::Long),
        Recipe::Float(spec) => forge.forge_float(*spec).map(ForgedValue::Float),
        Recipe::Double(spec) => forge.forge_double(*spec).map(ForgedValue::Double),
        Recipe::Text { flavor, case, size } => Ok(ForgedValue::String(
            forge.forge_string(*flavor, *case, *size),
        )),
        Recipe::Pattern(pattern) => forge
            .forge_string_matching(pattern)
            .map(ForgedValue::String),
        Recipe::OneOf(alternatives) => {
            let alternative = forge.an_element_from(alternatives).ok_or_else(|| {
                ForgeError::InvalidConstraint("one_of needs at least one alternative".to_string())
            })?;
            forge_recipe(forge, alternative)
        }
        Recipe::List(element) => forge
            .forge_list(None, |f| forge_recipe(f, element))
            .map(ForgedValue::List),
        Recipe::Set(element) => forge
            .forge_distinct(None, |f| forge_recipe(f, element))
            .map(ForgedValue::Set),
        Recipe::Map { key, value } => forge
            .forge_entries(None, |f| forge_recipe(f, key), |f| forge_recipe(f, value))
            .map(ForgedValue::Map),
    }
}
