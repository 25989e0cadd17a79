//! Slot shape resolution.

use forge_core::{ContainerKind, ForgeType, Shape};
use std::fmt;
use thiserror::Error;

/// A slot shape with every type parameter bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedShape {
    /// One value
    Scalar(ForgeType),

    /// List, set or collection of one element type
    Single {
        kind: ContainerKind,
        element: Box<ResolvedShape>,
    },

    /// Map from key to value
    KeyValue {
        key: Box<ResolvedShape>,
        value: Box<ResolvedShape>,
    },
}

impl fmt::Display for ResolvedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(ty) => write!(f, "{ty}"),
            Self::Single { kind, element } => write!(f, "{kind}<{element}>"),
            Self::KeyValue { key, value } => write!(f, "map<{key}, {value}>"),
        }
    }
}

/// Why a shape could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A type parameter has no concrete binding
    #[error("Unresolvable generic type parameter {parameter}")]
    UnresolvableGeneric { parameter: String },

    /// The container layout is not one the Forge can fill
    #[error("Unsupported shape {shape}: {reason}")]
    Unsupported { shape: String, reason: String },
}

/// Resolve every nesting level of `shape`.
pub fn resolve_shape(shape: &Shape) -> Result<ResolvedShape, ShapeError> {
    match shape {
        Shape::Scalar(ty) => Ok(ResolvedShape::Scalar(*ty)),
        Shape::Single { kind, element } => {
            if *kind == ContainerKind::Map {
                return Err(ShapeError::Unsupported {
                    shape: shape.to_string(),
                    reason: "a map needs a key and a value type".to_string(),
                });
            }
            Ok(ResolvedShape::Single {
                kind: *kind,
                element: Box::new(resolve_shape(element)?),
            })
        }
        Shape::KeyValue { kind, key, value } => {
            if *kind != ContainerKind::Map {
                return Err(ShapeError::Unsupported {
                    shape: shape.to_string(),
                    reason: format!("a {kind} has a single element type"),
                });
            }
            Ok(ResolvedShape::KeyValue {
                key: Box::new(resolve_shape(key)?),
                value: Box::new(resolve_shape(value)?),
            })
        }
        Shape::Parameter(name) => Err(ShapeError::UnresolvableGeneric {
            parameter: (*name).to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::TypeKey;

    struct Foo;

    #[test]
    fn test_resolve_nested_containers() {
        let foo = ForgeType::Custom(TypeKey::of::<Foo>());
        let shape = Shape::map(
            Shape::scalar(ForgeType::Text),
            Shape::list(Shape::set(Shape::scalar(foo))),
        );
        let resolved = resolve_shape(&shape).unwrap();
        assert_eq!(
            resolved,
            ResolvedShape::KeyValue {
                key: Box::new(ResolvedShape::Scalar(ForgeType::Text)),
                value: Box::new(ResolvedShape::Single {
                    kind: ContainerKind::List,
                    element: Box::new(ResolvedShape::Single {
                        kind: ContainerKind::Set,
                        element: Box::new(ResolvedShape::Scalar(foo)),
                    }),
                }),
            }
        );
    }

    #[test]
    fn test_parameter_at_any_depth_is_unresolvable() {
        let shape = Shape::list(Shape::map(
            Shape::scalar(ForgeType::Int32),
            Shape::parameter("T"),
        ));
        assert_eq!(
            resolve_shape(&shape),
            Err(ShapeError::UnresolvableGeneric {
                parameter: "T".to_string()
            })
        );
    }

    #[test]
    fn test_mismatched_container_kinds() {
        let single_map = Shape::single(ContainerKind::Map, Shape::scalar(ForgeType::Int32));
        assert!(matches!(
            resolve_shape(&single_map),
            Err(ShapeError::Unsupported { .. })
        ));

        let keyed_list = Shape::KeyValue {
            kind: ContainerKind::List,
            key: Box::new(Shape::scalar(ForgeType::Int32)),
            value: Box::new(Shape::scalar(ForgeType::Int32)),
        };
        assert!(matches!(
            resolve_shape(&keyed_list),
            Err(ShapeError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = resolve_shape(&Shape::set(Shape::parameter("K"))).unwrap_err();
        assert_eq!(err.to_string(), "Unresolvable generic type parameter K");

        let err = resolve_shape(&Shape::single(
            ContainerKind::Map,
            Shape::scalar(ForgeType::Int32),
        ))
        .unwrap_err();
        assert!(err.to_string().starts_with("Unsupported shape "));
        assert!(err.to_string().ends_with(": a map needs a key and a value type"));

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_collection_is_single() {
        let resolved = resolve_shape(&Shape::collection(Shape::scalar(ForgeType::Bool))).unwrap();
        assert_eq!(resolved.to_string(), "collection<bool>");
    }
}
