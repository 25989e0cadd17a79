//! Container generators.
//!
//! Element generators receive the Forge so elements can be forged with any
//! of its operations. Every element is forged in order, so containers are as
//! reproducible as scalars.

use crate::error::ForgeError;
use crate::forge::Forge;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Attempts made to forge an element that is not already in a set (or a key
/// not already in a map) before giving up.
pub const MAX_DISTINCT_ATTEMPTS: usize = 64;

/// Generate `size` elements, or a default size when `None`.
pub fn generate_list<T, F>(
    forge: &mut Forge,
    size: Option<usize>,
    mut element: F,
) -> Result<Vec<T>, ForgeError>
where
    F: FnMut(&mut Forge) -> Result<T, ForgeError>,
{
    let size = forge.resolve_size(size);
    let mut items = Vec::with_capacity(size);
    for _ in 0..size {
        items.push(element(forge)?);
    }
    Ok(items)
}

/// Generate `size` pairwise distinct elements, compared with `PartialEq`.
///
/// Elements are kept in generation order.
pub fn generate_distinct<T, F>(
    forge: &mut Forge,
    size: Option<usize>,
    mut element: F,
) -> Result<Vec<T>, ForgeError>
where
    T: PartialEq,
    F: FnMut(&mut Forge) -> Result<T, ForgeError>,
{
    let requested = forge.resolve_size(size);
    let mut items: Vec<T> = Vec::with_capacity(requested);
    while items.len() < requested {
        let candidate = forge_new(forge, requested, items.len(), &mut element, |c| {
            !items.contains(c)
        })?;
        items.push(candidate);
    }
    Ok(items)
}

/// Generate a set of `size` elements.
pub fn generate_set<T, F>(
    forge: &mut Forge,
    size: Option<usize>,
    mut element: F,
) -> Result<HashSet<T>, ForgeError>
where
    T: Eq + Hash,
    F: FnMut(&mut Forge) -> Result<T, ForgeError>,
{
    let requested = forge.resolve_size(size);
    let mut items = HashSet::with_capacity(requested);
    while items.len() < requested {
        let candidate = forge_new(forge, requested, items.len(), &mut element, |c| {
            !items.contains(c)
        })?;
        items.insert(candidate);
    }
    Ok(items)
}

/// Generate `size` entries with pairwise distinct keys, in generation order.
///
/// Each entry forges its key first (retrying until it is new), then its value.
pub fn generate_entries<K, V, FK, FV>(
    forge: &mut Forge,
    size: Option<usize>,
    mut key: FK,
    mut value: FV,
) -> Result<Vec<(K, V)>, ForgeError>
where
    K: PartialEq,
    FK: FnMut(&mut Forge) -> Result<K, ForgeError>,
    FV: FnMut(&mut Forge) -> Result<V, ForgeError>,
{
    let requested = forge.resolve_size(size);
    let mut entries: Vec<(K, V)> = Vec::with_capacity(requested);
    while entries.len() < requested {
        let k = forge_new(forge, requested, entries.len(), &mut key, |c| {
            !entries.iter().any(|(existing, _)| existing == c)
        })?;
        let v = value(forge)?;
        entries.push((k, v));
    }
    Ok(entries)
}

/// Generate a map of `size` entries.
pub fn generate_map<K, V, FK, FV>(
    forge: &mut Forge,
    size: Option<usize>,
    key: FK,
    value: FV,
) -> Result<HashMap<K, V>, ForgeError>
where
    K: Eq + Hash,
    FK: FnMut(&mut Forge) -> Result<K, ForgeError>,
    FV: FnMut(&mut Forge) -> Result<V, ForgeError>,
{
    Ok(generate_entries(forge, size, key, value)?
        .into_iter()
        .collect())
}

fn forge_new<T, F, P>(
    forge: &mut Forge,
    requested: usize,
    reached: usize,
    element: &mut F,
    is_new: P,
) -> Result<T, ForgeError>
where
    F: FnMut(&mut Forge) -> Result<T, ForgeError>,
    P: Fn(&T) -> bool,
{
    for _ in 0..MAX_DISTINCT_ATTEMPTS {
        let candidate = element(forge)?;
        if is_new(&candidate) {
            return Ok(candidate);
        }
    }
    tracing::debug!(
        requested,
        reached,
        attempts = MAX_DISTINCT_ATTEMPTS,
        "Giving up on distinct elements"
    );
    Err(ForgeError::CollectionSizeUnreachable { requested, reached })
}
