//! Process-wide cache of compiled descriptions
//!
//! The cache is unbounded: every distinct description stays compiled until
//! [`clear_cache`] is called. Hosts that see an open-ended stream of
//! descriptions should clear it periodically or use [`HousesParser`] directly.

use std::sync::Arc;

use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::Result;
use crate::houses::parser::HousesParser;

/// Compiled parsers keyed by raw description
static PARSER_CACHE: Lazy<RwLock<AHashMap<String, Arc<HousesParser>>>> = Lazy::new(|| {
    let map = AHashMap::with_capacity(256);
    RwLock::new(map)
});

/// Get or compile a description. Failed compilations are not cached.
#[inline]
pub fn get_or_compile(description: &str) -> Result<Arc<HousesParser>> {
    {
        let cache = PARSER_CACHE.read();
        if let Some(parser) = cache.get(description) {
            return Ok(Arc::clone(parser));
        }
    }

    tracing::debug!(description, "house description cache miss");
    let parser = Arc::new(HousesParser::new(description)?);

    let mut cache = PARSER_CACHE.write();
    let entry = cache
        .entry(description.to_string())
        .or_insert_with(|| Arc::clone(&parser));
    Ok(Arc::clone(entry))
}

/// Check a house number against a description, compiling it at most once
#[inline]
pub fn check_house(description: &str, house_number: &str) -> Result<bool> {
    get_or_compile(description)?.is_included(house_number)
}

/// Drop every cached parser. This is the only way cached memory is released.
pub fn clear_cache() {
    PARSER_CACHE.write().clear();
}

/// Number of cached descriptions
pub fn cache_size() -> usize {
    PARSER_CACHE.read().len()
}
