//! Slot injection.

use crate::dispatch::{forge_recipe, plan};
use crate::error::InjectionError;
use crate::marker::Marker;
use crate::shape::{resolve_shape, ResolvedShape, ShapeError};
use crate::slot::{Forgeable, SlotAccess, SlotSet};
use forge_core::{ForgedValue, FromForged, Shape, Shaped, TypeKey};
use forge_generator::Forge;

const PARAMETER_SLOT: &str = "parameter";

/// Observer notified after each committed slot.
pub trait SlotListener {
    fn on_injected(&mut self, owner: TypeKey, slot: &str);
}

impl<F> SlotListener for F
where
    F: FnMut(TypeKey, &str),
{
    fn on_injected(&mut self, owner: TypeKey, slot: &str) {
        self(owner, slot)
    }
}

/// Fills the marked slots of [`Forgeable`] targets from a [`Forge`].
///
/// Slots are processed in [`SlotSet::collect`] order. Injection stops at the
/// first failing slot; slots committed before it keep their new values.
#[derive(Debug, Default, Clone, Copy)]
pub struct Injector;

impl Injector {
    pub fn new() -> Self {
        Self
    }

    /// Inject every marked slot of `target`.
    pub fn inject<T: Forgeable>(
        &self,
        forge: &mut Forge,
        target: &mut T,
        listener: Option<&mut dyn SlotListener>,
    ) -> Result<(), InjectionError> {
        self.inject_slots(forge, target, listener)
            .inspect_err(|e| {
                tracing::debug!(
                    target_type = std::any::type_name::<T>(),
                    seed = forge.seed(),
                    error = %e,
                    "Injection failed"
                );
            })
    }

    fn inject_slots<T: Forgeable>(
        &self,
        forge: &mut Forge,
        target: &mut T,
        mut listener: Option<&mut dyn SlotListener>,
    ) -> Result<(), InjectionError> {
        for entry in SlotSet::<T>::collect().into_entries() {
            let info = &entry.info;
            let Some(marker) = info.marker() else {
                continue;
            };
            if marker.is_foreign() {
                continue;
            }

            let slot = info.qualified_name();
            let setter = match (info.access(), entry.setter.as_ref()) {
                (SlotAccess::Writable, Some(setter)) => setter,
                _ => return Err(InjectionError::ImmutableSlot { slot }),
            };

            let shape = resolve(info.shape(), &slot)?;
            let recipe = plan(marker, &shape, &slot)?;

            let value = forge_recipe(forge, &recipe)
                .map_err(|e| InjectionError::forge(slot.as_str(), e))?;
            setter(target, value).map_err(|source| InjectionError::TypeMismatch {
                slot: slot.clone(),
                source,
            })?;

            tracing::trace!(slot = %slot, shape = %shape, "Injected slot");
            if let Some(listener) = listener.as_mut() {
                listener.on_injected(info.owner(), info.name());
            }
        }
        Ok(())
    }

    /// Forge a standalone value of `shape`, e.g. for a test method parameter.
    pub fn resolve_parameter(
        &self,
        forge: &mut Forge,
        marker: &Marker,
        shape: &Shape,
    ) -> Result<ForgedValue, InjectionError> {
        let shape = resolve(shape, PARAMETER_SLOT)?;
        let recipe = plan(marker, &shape, PARAMETER_SLOT)?;
        forge_recipe(forge, &recipe).map_err(|e| InjectionError::forge(PARAMETER_SLOT, e))
    }

    /// Forge a standalone value of type `F`.
    pub fn resolve_as<F: FromForged + Shaped>(
        &self,
        forge: &mut Forge,
        marker: &Marker,
    ) -> Result<F, InjectionError> {
        let value = self.resolve_parameter(forge, marker, &F::shape())?;
        F::from_forged(value).map_err(|source| InjectionError::TypeMismatch {
            slot: PARAMETER_SLOT.to_string(),
            source,
        })
    }
}

fn resolve(shape: &Shape, slot: &str) -> Result<ResolvedShape, InjectionError> {
    resolve_shape(shape).map_err(|e| match e {
        ShapeError::UnresolvableGeneric { parameter } => InjectionError::UnresolvableGeneric {
            slot: slot.to_string(),
            parameter,
        },
        ShapeError::Unsupported { shape, reason } => InjectionError::UnsupportedShape {
            slot: slot.to_string(),
            shape,
            reason,
        },
    })
}
