//! ID prefixes and deterministic ID allocation.
//!
//! IDs have the form `{prefix}-{n}`. The next ID is one past the largest
//! numeric suffix already in use, so replaying the same journal always
//! yields the same IDs.

use crate::errors::CoreError;

pub const PREFIX_RULE: &str = "rule";
pub const PREFIX_THREAD: &str = "thread";
pub const PREFIX_COMMENT: &str = "comment";

/// Numeric suffix of `id` if it carries `prefix`.
#[must_use]
pub fn sequence_of(prefix: &str, id: &str) -> Option<u64> {
    id.strip_prefix(prefix)?.strip_prefix('-')?.parse().ok()
}

/// Allocate the next ID for `prefix` given the IDs already in use.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the largest suffix is already `u64::MAX`.
pub fn next_id<'a>(
    prefix: &str,
    existing: impl IntoIterator<Item = &'a str>,
) -> Result<String, CoreError> {
    let max = existing
        .into_iter()
        .filter_map(|id| sequence_of(prefix, id))
        .max()
        .unwrap_or(0);
    let next = max
        .checked_add(1)
        .ok_or_else(|| CoreError::Validation(format!("{prefix} id sequence exhausted")))?;
    Ok(format!("{prefix}-{next}"))
}
