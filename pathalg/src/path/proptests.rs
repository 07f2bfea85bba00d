//! Property-based tests for resolution and relative paths.
//!
//! Note: The normalize module already has property tests for cleaning.
//! This module focuses on how resolve and relative_path fit together.

use super::resolver::PathResolver;
use crate::platform::Platform;
use proptest::prelude::*;

const UNIX: PathResolver = PathResolver::new(Platform::Unix);
const WINDOWS: PathResolver = PathResolver::new(Platform::Windows);

// Strategy for generating path segments without dot-only names
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,8}"
}

fn unix_absolute_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 0..6).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn windows_absolute_strategy(drive: char) -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 0..6)
        .prop_map(move |parts| format!("{drive}:\\{}", parts.join("\\")))
}

// Fragments mixing names with `.` and `..`
fn unix_fragment_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            segment_strategy(),
        ],
        0..8,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Resolving a normalized absolute path returns it unchanged, whatever the base
    #[test]
    fn resolve_normalized_absolute_is_identity(base in unix_absolute_strategy(), path in unix_absolute_strategy()) {
        prop_assert_eq!(UNIX.resolve(&base, &path), path.clone());
    }

    // Resolving a resolved path again is a no-op
    #[test]
    fn resolve_idempotent(base in unix_absolute_strategy(), fragment in unix_fragment_strategy(), other in unix_absolute_strategy()) {
        let once = UNIX.resolve(&base, &fragment);
        prop_assert_eq!(UNIX.resolve(&other, &once), once.clone());
    }

    // Resolution against an absolute base stays absolute and dot-free
    #[test]
    fn resolve_stays_absolute(base in unix_absolute_strategy(), fragment in unix_fragment_strategy()) {
        let resolved = UNIX.resolve(&base, &fragment);
        prop_assert!(UNIX.is_absolute_path(&resolved));
        for segment in resolved.split('/') {
            prop_assert_ne!(segment, ".");
            prop_assert_ne!(segment, "..");
        }
    }

    // Forced relative paths resolve back to the target
    #[test]
    fn unix_relative_round_trip(base in unix_absolute_strategy(), target in unix_absolute_strategy()) {
        let relative = UNIX.relative_path(&base, &target, true);
        prop_assert!(!UNIX.is_absolute_path(&relative), "forced result {} is absolute", relative);
        prop_assert_eq!(UNIX.resolve(&base, &relative), target.clone());
    }

    // Unforced relative paths also resolve back to the target
    #[test]
    fn unix_relative_round_trip_unforced(base in unix_absolute_strategy(), target in unix_absolute_strategy()) {
        let relative = UNIX.relative_path(&base, &target, false);
        prop_assert_eq!(UNIX.resolve(&base, &relative), target.clone());
    }

    // Same-drive Windows paths round-trip through relative_path
    #[test]
    fn windows_relative_round_trip(base in windows_absolute_strategy('C'), target in windows_absolute_strategy('C'), force in any::<bool>()) {
        let relative = WINDOWS.relative_path(&base, &target, force);
        prop_assert_eq!(WINDOWS.resolve(&base, &relative), target.clone());
    }

    // Paths on different drives are never relativized
    #[test]
    fn windows_cross_drive_passthrough(base in windows_absolute_strategy('C'), target in windows_absolute_strategy('D'), force in any::<bool>()) {
        prop_assert_eq!(WINDOWS.relative_path(&base, &target, force), target.clone());
    }

    // A path relative to itself is always "."
    #[test]
    fn relative_to_self_is_dot(path in unix_absolute_strategy(), force in any::<bool>()) {
        prop_assert_eq!(UNIX.relative_path(&path, &path, force), ".");
    }

    // Descendants always get a "./" prefix
    #[test]
    fn descendant_has_dot_prefix(base in unix_absolute_strategy(), tail in prop::collection::vec(segment_strategy(), 1..4)) {
        let target = format!("{}/{}", base.trim_end_matches('/'), tail.join("/"));
        let relative = UNIX.relative_path(&base, &target, false);
        if base == "/" {
            // The trimmed root shares no segment with anything
            prop_assert_eq!(relative, target.clone());
        } else {
            prop_assert_eq!(relative, format!("./{}", tail.join("/")));
        }
    }
}
