//! Command to normalize a path.

use crate::error::CliError;
use crate::utils::Session;
use clap::Args;
use pathalg::Platform;
use serde::Serialize;

/// Collapse `.`, `..` and repeated separators in a path.
#[derive(Args)]
pub struct CleanCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Serialize)]
struct CleanOutput<'a> {
    platform: Platform,
    path: &'a str,
    clean: &'a str,
}

impl CleanCommand {
    pub fn execute(self, session: &Session) -> Result<(), CliError> {
        let resolver = session.resolver();
        let clean = resolver.clean(&self.path);

        session.emit(
            &clean,
            &CleanOutput {
                platform: resolver.platform(),
                path: &self.path,
                clean: &clean,
            },
        )
    }
}
