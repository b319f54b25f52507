//! Literal substring replacement

use crate::common::cap;
use std::borrow::Cow;

/// Replace at most `limit` occurrences of `target` in `source`, scanning left to right.
///
/// `limit` follows the split convention: 0 leaves the source alone, negative
/// replaces every occurrence. An empty `target` inserts `replacement` at each
/// character boundary, both ends included. Returns a borrowed `Cow` when
/// nothing changes.
pub fn replace<'a>(
    source: &'a str,
    target: &str,
    replacement: &str,
    limit: isize,
) -> Cow<'a, str> {
    if limit == 0 || target == replacement {
        return Cow::Borrowed(source);
    }

    // An empty target matches everywhere, even in an empty source
    if !target.is_empty() && !source.contains(target) {
        return Cow::Borrowed(source);
    }

    match cap(limit) {
        Some(n) => Cow::Owned(source.replacen(target, replacement, n)),
        None => Cow::Owned(source.replace(target, replacement)),
    }
}

/// Replace the first occurrence of `target`
pub fn replace_first<'a>(source: &'a str, target: &str, replacement: &str) -> Cow<'a, str> {
    replace(source, target, replacement, 1)
}

/// Replace every occurrence of `target`
pub fn replace_all<'a>(source: &'a str, target: &str, replacement: &str) -> Cow<'a, str> {
    replace(source, target, replacement, -1)
}
