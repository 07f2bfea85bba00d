//! Command to check whether a path is absolute.

use crate::error::CliError;
use crate::utils::Session;
use clap::Args;
use pathalg::Platform;
use serde::Serialize;

/// Assert that a path is absolute under the selected grammar.
///
/// Prints `true` or `false` and exits with status 1 when the assertion
/// fails.
#[derive(Args)]
pub struct IsAbsoluteCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Invert the assertion (fail if the path is absolute)
    #[arg(long)]
    pub not: bool,
}

#[derive(Serialize)]
struct IsAbsoluteOutput<'a> {
    platform: Platform,
    path: &'a str,
    absolute: bool,
}

impl IsAbsoluteCommand {
    pub fn execute(self, session: &Session) -> Result<(), CliError> {
        let resolver = session.resolver();
        let absolute = resolver.is_absolute_path(&self.path);

        session.emit(
            if absolute { "true" } else { "false" },
            &IsAbsoluteOutput {
                platform: resolver.platform(),
                path: &self.path,
                absolute,
            },
        )?;

        let success = if self.not { !absolute } else { absolute };
        if success {
            Ok(())
        } else {
            let msg = if self.not {
                format!("Assertion failed: '{}' is absolute", self.path)
            } else {
                format!("Assertion failed: '{}' is not absolute", self.path)
            };
            Err(CliError::SemanticFailure(msg))
        }
    }
}
