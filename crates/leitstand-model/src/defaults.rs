//! Helpers for pushing inherited values down onto menus and items.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};

/// Copy every inherited entry whose key `own` does not define yet.
pub(crate) fn merge_missing<V: Clone>(
    own: &mut BTreeMap<String, V>,
    inherited: &BTreeMap<String, V>,
) {
    for (key, value) in inherited {
        own.entry(key.clone()).or_insert_with(|| value.clone());
    }
}

pub(crate) fn union(own: &mut BTreeSet<String>, inherited: &BTreeSet<String>) {
    own.extend(inherited.iter().cloned());
}

/// Fail with [`Error::MissingField`] unless `value` is non-blank.
pub(crate) fn require(entity: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::missing(entity, field));
    }
    Ok(())
}
