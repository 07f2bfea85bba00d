//! Command to show the selected path grammar.

use crate::error::CliError;
use crate::utils::Session;
use clap::Args;
use pathalg::Platform;
use serde::Serialize;

/// Show which path grammar commands will use.
#[derive(Args)]
pub struct ShowPlatformCommand {}

#[derive(Serialize)]
struct PlatformOutput {
    platform: Platform,
    separator: char,
}

impl ShowPlatformCommand {
    pub fn execute(self, session: &Session) -> Result<(), CliError> {
        let resolver = session.resolver();
        let output = PlatformOutput {
            platform: resolver.platform(),
            separator: resolver.separator(),
        };

        session.emit(
            &format!("{} {}", output.platform, output.separator),
            &output,
        )
    }
}
