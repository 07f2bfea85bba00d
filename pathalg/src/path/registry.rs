//! Memoized resolver-per-platform lookup.
//!
//! The registry is an ordinary value: construct one where the program starts
//! and hand references to whatever needs a resolver. Each platform slot is
//! filled on first request and never changes afterwards.

use std::sync::OnceLock;

use crate::path::resolver::PathResolver;
use crate::platform::Platform;

/// Lazily built resolvers, one per platform.
///
/// Safe to share between threads; concurrent first requests for the same
/// platform initialize its slot exactly once.
///
/// # Examples
///
/// ```
/// use pathalg::{Platform, ResolverRegistry};
///
/// let registry = ResolverRegistry::new();
/// let windows = registry.for_hint(Some("Windows"));
/// assert_eq!(windows.platform(), Platform::Windows);
///
/// // Later lookups return the same instance
/// assert!(std::ptr::eq(windows, registry.get(Platform::Windows)));
/// ```
#[derive(Debug, Default)]
pub struct ResolverRegistry {
    unix: OnceLock<PathResolver>,
    windows: OnceLock<PathResolver>,
}

impl ResolverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolver for `platform`, built on first use.
    #[must_use]
    pub fn get(&self, platform: Platform) -> &PathResolver {
        self.slot(platform).get_or_init(|| {
            log::debug!("initializing {platform} path resolver");
            PathResolver::new(platform)
        })
    }

    /// The resolver for an operating-system family hint.
    ///
    /// See [`Platform::from_hint`]: `"Windows"` selects Windows, anything
    /// else selects Unix, and `None` selects the host platform.
    #[must_use]
    pub fn for_hint(&self, hint: Option<&str>) -> &PathResolver {
        self.get(Platform::from_hint(hint))
    }

    /// The resolver matching the host operating system.
    #[must_use]
    pub fn host(&self) -> &PathResolver {
        self.get(Platform::host())
    }

    /// Whether the slot for `platform` has been filled yet.
    #[must_use]
    pub fn is_initialized(&self, platform: Platform) -> bool {
        self.slot(platform).get().is_some()
    }

    fn slot(&self, platform: Platform) -> &OnceLock<PathResolver> {
        match platform {
            Platform::Unix => &self.unix,
            Platform::Windows => &self.windows,
        }
    }
}
