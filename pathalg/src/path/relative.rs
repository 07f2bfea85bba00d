//! Shortest relative path between two absolute paths.

use crate::path::grammar::PathGrammar;
use crate::path::normalize::join;

/// Compute the path leading from `base` to `target`.
///
/// Both inputs are expected to be absolute. Leading and trailing separators
/// are trimmed before comparing, and segments are compared exactly (case
/// matters).
///
/// The target is returned unchanged when no relative form applies:
/// - on Windows, when the two paths are on different drives (even with `force`)
/// - when the paths share no leading segment and `force` is false
///
/// Otherwise the result climbs out of the unshared part of `base` with `..`
/// segments and descends into the rest of `target`. A target below `base`
/// is prefixed with `./`, and a target equal to `base` yields `.`.
///
/// # Examples
///
/// ```
/// use pathalg::path::{relative::relative_path, PathGrammar};
/// use pathalg::Platform;
///
/// let unix = PathGrammar::new(Platform::Unix);
/// assert_eq!(relative_path(unix, "/a/b/c", "/a/b/d", false), "../d");
/// assert_eq!(relative_path(unix, "/a/b/c", "/a/b/c/d/e/", false), "./d/e");
/// assert_eq!(relative_path(unix, "/a/b", "/x/y", false), "/x/y");
/// assert_eq!(relative_path(unix, "/a/b", "/x/y", true), "../../x/y");
/// ```
#[must_use]
pub fn relative_path(grammar: PathGrammar, base: &str, target: &str, force: bool) -> String {
    let base_drive = grammar.drive(base);
    let target_drive = grammar.drive(target);
    if base_drive != target_drive {
        log::debug!("no relative path between drives {base_drive:?} and {target_drive:?}");
        return target.to_string();
    }

    let separator = grammar.separator();
    let base_segments: Vec<&str> = base.trim_matches(separator).split(separator).collect();
    let target_segments: Vec<&str> = target.trim_matches(separator).split(separator).collect();

    let common = base_segments
        .iter()
        .zip(&target_segments)
        .take_while(|(b, t)| b == t)
        .count();

    if common == 0 && !force {
        return target.to_string();
    }

    let ascend = base_segments.len() - common;
    let mut relative = String::new();
    for _ in 0..ascend {
        relative.push_str("..");
        relative.push(separator);
    }
    relative.push_str(&join(&target_segments[common..], separator));

    let relative = relative.trim_end_matches(separator);
    if relative.is_empty() {
        ".".to_string()
    } else if ascend == 0 {
        format!(".{separator}{relative}")
    } else {
        relative.to_string()
    }
}
