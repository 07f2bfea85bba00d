//! Command to resolve a path against a base.

use crate::error::CliError;
use crate::utils::Session;
use clap::Args;
use pathalg::Platform;
use serde::Serialize;

/// Resolve a path against a base and print the normalized result.
#[derive(Args)]
pub struct ResolveCommand {
    /// Absolute base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Path to resolve (absolute or relative)
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Serialize)]
struct ResolveOutput<'a> {
    platform: Platform,
    base: &'a str,
    path: &'a str,
    resolved: &'a str,
}

impl ResolveCommand {
    pub fn execute(self, session: &Session) -> Result<(), CliError> {
        let resolver = session.resolver();

        if !resolver.is_absolute_path(&self.base) {
            log::warn!("base path '{}' is not absolute", self.base);
        }

        let resolved = resolver.resolve(&self.base, &self.path);

        session.emit(
            &resolved,
            &ResolveOutput {
                platform: resolver.platform(),
                base: &self.base,
                path: &self.path,
                resolved: &resolved,
            },
        )
    }
}
