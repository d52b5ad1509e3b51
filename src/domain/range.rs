//! Derives relaxed upper-bound requirements from version ranges
//!
//! Handles range formats:
//! - Comparator ranges: `^1.2.3`, `~1.2.3`, `>=1.2.3`, `>1.2.3`
//! - Bare versions: `1.2.3`, `1.2`, `v2.1.0`
//! - Hyphen ranges: `1.0.0 - 2.3.4` (only the upper bound is considered)
//! - OR combinations: `1.x || 2.x` (each branch handled independently)
//! - Wildcards: `*`, `x`, `latest`, empty string (passed through)

use regex::Regex;
use std::sync::LazyLock;

// A single leading comparator; `>=` must win over `>`.
static COMPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:>=|[>~^])").unwrap());
static VERSION_LIKE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[v\d]").unwrap());

/// Derives a loose `<=major.minor` requirement from a version range.
///
/// The result tolerates patch-level drift while still bounding the
/// major/minor version. Anything past the first two dot-separated
/// components, including pre-release tags, is dropped. Wildcard tokens and
/// ranges that are already upper bounds are returned unchanged. Returns
/// `None` when the range has an unrecognized shape, in which case the
/// caller should keep whatever requirement it already has.
pub fn loosen(range: &str) -> Option<String> {
    if range.contains("||") {
        let joined = range
            .split("||")
            .map(|branch| loosen(branch).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("||");
        return Some(joined);
    }

    if range.contains(" - ") {
        let upper = range.split(" - ").nth(1)?;
        return loosen(upper);
    }

    let stripped = COMPARATOR_RE.replace(range.trim(), "");

    if VERSION_LIKE_RE.is_match(&stripped) {
        let bound = stripped.split('.').take(2).collect::<Vec<_>>().join(".");
        return Some(format!("<={}", bound));
    }

    if stripped.starts_with('<') || matches!(stripped.as_ref(), "*" | "x" | "latest" | "") {
        return Some(stripped.into_owned());
    }

    None
}
