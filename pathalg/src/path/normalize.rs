//! Path normalization functions.
//!
//! Normalization is a three-step pipeline over plain strings:
//! - Split the path into segments on runs of the separator
//! - Clean the segments, dropping `.` and collapsing `..`
//! - Join the surviving segments back with the separator
//!
//! Only the separator passed in is treated as a boundary; any other
//! separator-looking character is part of a segment.

/// Split `path` into segments on one or more consecutive separators.
///
/// Empty pieces produced by leading, trailing or repeated separators are
/// dropped.
///
/// # Examples
///
/// ```
/// use pathalg::path::normalize::split;
///
/// assert_eq!(split("/a//b/", '/'), vec!["a", "b"]);
/// assert_eq!(split("a\\b", '/'), vec!["a\\b"]);
/// assert!(split("///", '/').is_empty());
/// ```
#[must_use]
pub fn split(path: &str, separator: char) -> Vec<&str> {
    path.split(separator)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Remove `.` segments and resolve `..` segments in a single pass.
///
/// A `..` consumes the segment before it. A `..` with nothing left to consume
/// is dropped, so the result can never climb above its starting point.
/// Collapses cascade: `a/b/../../c` leaves only `c`.
///
/// # Examples
///
/// ```
/// use pathalg::path::normalize::clean_segments;
///
/// assert_eq!(clean_segments(vec!["a", "b", "..", "..", "c"]), vec!["c"]);
/// assert_eq!(clean_segments(vec!["..", "a"]), vec!["a"]);
/// assert_eq!(clean_segments(vec!["a", ".", "b"]), vec!["a", "b"]);
/// ```
#[must_use]
pub fn clean_segments<'a, I>(segments: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut cleaned = Vec::new();

    for segment in segments {
        match segment {
            "." => {}
            ".." => {
                // Nothing to consume at the start; the `..` just disappears
                cleaned.pop();
            }
            _ => cleaned.push(segment),
        }
    }

    cleaned
}

/// Join segments with `separator`. No trailing separator is added.
#[must_use]
pub fn join(segments: &[&str], separator: char) -> String {
    let mut buf = [0u8; 4];
    segments.join(separator.encode_utf8(&mut buf))
}

/// Normalize `path` through split, clean and join.
///
/// A leading separator is kept as the root, so absolute paths stay absolute.
/// The operation is idempotent.
///
/// # Examples
///
/// ```
/// use pathalg::path::normalize::clean;
///
/// assert_eq!(clean("a/b/../../c", '/'), "c");
/// assert_eq!(clean("../a", '/'), "a");
/// assert_eq!(clean("/mnt/d/test4/../test3", '/'), "/mnt/d/test3");
/// assert_eq!(clean("/..", '/'), "/");
/// ```
#[must_use]
pub fn clean(path: &str, separator: char) -> String {
    let body = join(&clean_segments(split(path, separator)), separator);

    if path.starts_with(separator) {
        let mut rooted = String::with_capacity(body.len() + separator.len_utf8());
        rooted.push(separator);
        rooted.push_str(&body);
        rooted
    } else {
        body
    }
}
