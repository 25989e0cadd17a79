//! Slot declarations.
//!
//! A fixture type lists its injectable slots once, in [`Forgeable::declare_slots`].
//! Each slot carries its name, declared shape, marker and a setter that stores
//! a forged value through a field accessor. Parent fixtures embedded in a type
//! are pulled in with [`SlotSet::inherit`]; their slots keep their own owner and
//! are ordered after the child's.

use crate::marker::Marker;
use forge_core::{ForgedValue, FromForged, Shape, Shaped, TypeKey, ValueError};
use std::fmt;
use std::rc::Rc;

/// A type whose slots the injector can fill.
///
/// # Example
///
/// ```
/// use forge_inject::{Forgeable, Marker, SlotSet};
///
/// #[derive(Default)]
/// struct Fixture {
///     count: i32,
///     name: String,
/// }
///
/// impl Forgeable for Fixture {
///     fn declare_slots(slots: &mut SlotSet<Self>) {
///         slots
///             .field("count", Marker::int_range(0, 10), |f| &mut f.count)
///             .field("name", Marker::pattern("[a-z]{8}"), |f| &mut f.name);
///     }
/// }
/// ```
pub trait Forgeable: Sized + 'static {
    /// Declare every slot of `Self`, in declaration order.
    fn declare_slots(slots: &mut SlotSet<Self>);
}

/// Whether the injector may write a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAccess {
    Writable,
    ReadOnly,
}

/// Descriptor of one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotInfo {
    owner: TypeKey,
    name: &'static str,
    shape: Shape,
    marker: Option<Marker>,
    access: SlotAccess,
    depth: usize,
}

impl SlotInfo {
    /// The type declaring the slot.
    pub fn owner(&self) -> TypeKey {
        self.owner
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// `None` for slots the injector skips.
    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    pub fn access(&self) -> SlotAccess {
        self.access
    }

    /// 0 for the target's own slots, 1 for its parent's, and so on.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `Owner::name` with the owner's module path stripped.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", short_type_name(self.owner.name()), self.name)
    }
}

impl fmt::Display for SlotInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.qualified_name(), self.shape)
    }
}

fn short_type_name(name: &str) -> &str {
    let base = name.split('<').next().unwrap_or(name);
    match base.rfind("::") {
        Some(idx) => &name[idx + 2..],
        None => name,
    }
}

type Setter<T> = Rc<dyn Fn(&mut T, ForgedValue) -> Result<(), ValueError>>;

pub(crate) struct SlotEntry<T> {
    pub(crate) info: SlotInfo,
    pub(crate) setter: Option<Setter<T>>,
}

/// The ordered slots of `T`.
pub struct SlotSet<T> {
    entries: Vec<SlotEntry<T>>,
    depth: usize,
}

impl<T: Forgeable> SlotSet<T> {
    /// Collect the slots of `T`: own slots first, then ancestors breadth-first.
    pub fn collect() -> Self {
        let mut slots = Self::at_depth(0);
        T::declare_slots(&mut slots);
        slots.entries.sort_by_key(|entry| entry.info.depth);
        slots
    }

    fn at_depth(depth: usize) -> Self {
        Self {
            entries: Vec::new(),
            depth,
        }
    }

    fn push(
        &mut self,
        name: &'static str,
        shape: Shape,
        marker: Option<Marker>,
        access: SlotAccess,
        setter: Option<Setter<T>>,
    ) -> &mut Self {
        self.entries.push(SlotEntry {
            info: SlotInfo {
                owner: TypeKey::of::<T>(),
                name,
                shape,
                marker,
                access,
                depth: self.depth,
            },
            setter,
        });
        self
    }

    /// A writable slot whose shape follows from the field type.
    pub fn field<F, A>(&mut self, name: &'static str, marker: Marker, accessor: A) -> &mut Self
    where
        F: FromForged + Shaped + 'static,
        A: Fn(&mut T) -> &mut F + 'static,
    {
        self.field_as(name, marker, F::shape(), accessor)
    }

    /// A writable slot with an explicit shape.
    ///
    /// Used for fields whose declared type is generic and has no [`Shaped`]
    /// implementation.
    pub fn field_as<F, A>(
        &mut self,
        name: &'static str,
        marker: Marker,
        shape: Shape,
        accessor: A,
    ) -> &mut Self
    where
        F: FromForged + 'static,
        A: Fn(&mut T) -> &mut F + 'static,
    {
        let setter: Setter<T> = Rc::new(
            move |target: &mut T, value: ForgedValue| -> Result<(), ValueError> {
                *accessor(target) = F::from_forged(value)?;
                Ok(())
            },
        );
        self.push(name, shape, Some(marker), SlotAccess::Writable, Some(setter))
    }

    /// A marked slot the injector must not write.
    pub fn read_only<F: Shaped>(&mut self, name: &'static str, marker: Marker) -> &mut Self {
        self.push(name, F::shape(), Some(marker), SlotAccess::ReadOnly, None)
    }

    /// A slot without marker; listed but never injected.
    pub fn unmarked<F: Shaped>(&mut self, name: &'static str) -> &mut Self {
        self.push(name, F::shape(), None, SlotAccess::Writable, None)
    }

    /// Pull in the slots of an embedded parent fixture.
    pub fn inherit<P, A>(&mut self, projection: A) -> &mut Self
    where
        P: Forgeable,
        A: Fn(&mut T) -> &mut P + 'static,
    {
        let mut parent = SlotSet::<P>::at_depth(self.depth + 1);
        P::declare_slots(&mut parent);

        let projection = Rc::new(projection);
        for entry in parent.entries {
            let setter = entry.setter.map(|setter| {
                let projection = Rc::clone(&projection);
                Rc::new(
                    move |target: &mut T, value: ForgedValue| -> Result<(), ValueError> {
                        setter(projection(target), value)
                    },
                ) as Setter<T>
            });
            self.entries.push(SlotEntry {
                info: entry.info,
                setter,
            });
        }
        self
    }

    /// Slot descriptors in injection order.
    pub fn slots(&self) -> impl Iterator<Item = &SlotInfo> {
        self.entries.iter().map(|entry| &entry.info)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<SlotEntry<T>> {
        self.entries
    }
}

impl<T> fmt::Debug for SlotSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| &entry.info))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Base {
        id: i64,
    }

    impl Forgeable for Base {
        fn declare_slots(slots: &mut SlotSet<Self>) {
            slots.field("id", Marker::Forgery, |b| &mut b.id);
        }
    }

    #[derive(Default)]
    struct Middle {
        base: Base,
        label: String,
    }

    impl Forgeable for Middle {
        fn declare_slots(slots: &mut SlotSet<Self>) {
            slots
                .inherit(|m| &mut m.base)
                .field("label", Marker::Forgery, |m| &mut m.label);
        }
    }

    #[derive(Default)]
    struct Leaf {
        middle: Middle,
        count: i32,
        flags: Vec<bool>,
    }

    impl Forgeable for Leaf {
        fn declare_slots(slots: &mut SlotSet<Self>) {
            slots
                .inherit(|l| &mut l.middle)
                .field("count", Marker::Forgery, |l| &mut l.count)
                .unmarked::<Vec<bool>>("flags")
                .read_only::<i32>("version", Marker::Forgery);
        }
    }

    #[test]
    fn test_own_slots_then_ancestors_by_depth() {
        let slots = SlotSet::<Leaf>::collect();
        let order: Vec<_> = slots.slots().map(|s| (s.name(), s.depth())).collect();
        assert_eq!(
            order,
            vec![
                ("count", 0),
                ("flags", 0),
                ("version", 0),
                ("label", 1),
                ("id", 2),
            ]
        );
    }

    #[test]
    fn test_descriptor_metadata() {
        let slots = SlotSet::<Leaf>::collect();
        let infos: Vec<_> = slots.slots().collect();

        assert_eq!(infos[0].owner(), TypeKey::of::<Leaf>());
        assert_eq!(infos[0].qualified_name(), "Leaf::count");
        assert_eq!(infos[1].marker(), None);
        assert_eq!(infos[1].shape(), &Vec::<bool>::shape());
        assert_eq!(infos[2].access(), SlotAccess::ReadOnly);
        assert_eq!(infos[4].owner(), TypeKey::of::<Base>());
        assert_eq!(infos[4].qualified_name(), "Base::id");
    }

    #[test]
    fn test_inherited_setter_reaches_parent_storage() {
        let mut leaf = Leaf::default();
        let entries = SlotSet::<Leaf>::collect().into_entries();
        let id = entries
            .iter()
            .find(|entry| entry.info.name() == "id")
            .and_then(|entry| entry.setter.clone())
            .unwrap();
        id(&mut leaf, ForgedValue::Long(7)).unwrap();
        assert_eq!(leaf.middle.base.id, 7);

        assert!(id(&mut leaf, ForgedValue::Int(7)).is_err());
        assert_eq!(leaf.flags, Vec::<bool>::new());
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("a::b::Foo"), "Foo");
        assert_eq!(short_type_name("Foo"), "Foo");
        assert_eq!(
            short_type_name("a::Wrapper<b::Inner>"),
            "Wrapper<b::Inner>"
        );
    }
}
