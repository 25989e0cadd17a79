//! Process-wide cache of compiled patterns.
//!
//! Compiled patterns are immutable, so one `Arc<Pattern>` per pattern text is
//! shared by every Forge in the process.

use crate::ast::Pattern;
use crate::error::PatternError;
use crate::parser::compile;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Number of patterns kept before the cache is flushed.
pub const MAX_CACHED_PATTERNS: usize = 256;

static PATTERN_CACHE: Lazy<Mutex<HashMap<String, Arc<Pattern>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn lock() -> MutexGuard<'static, HashMap<String, Arc<Pattern>>> {
    // entries are only ever inserted whole, a poisoned map is still consistent
    PATTERN_CACHE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Compile `source`, reusing an earlier compilation of the same text.
///
/// Failed compilations are not cached.
pub fn compile_cached(source: &str) -> Result<Arc<Pattern>, PatternError> {
    if let Some(pattern) = lock().get(source) {
        return Ok(Arc::clone(pattern));
    }

    let pattern = Arc::new(compile(source)?);

    let mut cache = lock();
    if cache.len() >= MAX_CACHED_PATTERNS {
        tracing::debug!(entries = cache.len(), "Flushing pattern cache");
        cache.clear();
    }
    Ok(Arc::clone(
        cache.entry(source.to_string()).or_insert(pattern),
    ))
}

/// Number of patterns currently cached.
pub fn cached_patterns() -> usize {
    lock().len()
}
