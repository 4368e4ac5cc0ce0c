//! Template scan caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::template::Template;

/// Global cache for scanned templates.
///
/// Templates carry no locale state, so one cache safely serves every
/// formatter context.
static CACHE: Mutex<Option<LruCache<String, Template>>> = Mutex::new(None);

const CACHE_SIZE: usize = 100;

/// Get or scan a template, using the cache.
pub fn get_or_parse(template: &str) -> Template {
    let mut cache_guard = CACHE.lock().unwrap();

    let cache = cache_guard
        .get_or_insert_with(|| LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap()));

    if let Some(parsed) = cache.get(template) {
        return parsed.clone();
    }

    let parsed = Template::parse(template);
    cache.put(template.to_string(), parsed.clone());
    parsed
}
