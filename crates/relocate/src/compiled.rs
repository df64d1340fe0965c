// ABOUTME: Pre-compiled CSS selector cache shared by every relocation run.
// ABOUTME: Fragment tags and the id lookup selector are compiled once and reused.

//! Selector caching for repeated DOM queries.
//!
//! A CLI run over many pages asks for the same fragment tag every time, so
//! compiled matchers are kept in a process-wide cache.

use std::collections::HashMap;
use std::sync::RwLock;

use dom_query::Matcher;
use once_cell::sync::Lazy;

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Matcher>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `None` if the selector is invalid. Invalid selectors are cached
/// too, so a bad tag is only parsed once.
pub fn get_or_compile(css: &str) -> Option<Matcher> {
    {
        let cache = SELECTOR_CACHE
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Matcher::new(css).ok();
    let mut cache = SELECTOR_CACHE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    // Another thread may have inserted while we compiled.
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}
