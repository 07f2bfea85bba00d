//! Command to compute a relative path.

use crate::error::CliError;
use crate::utils::Session;
use clap::Args;
use pathalg::Platform;
use serde::Serialize;

/// Print the path leading from BASE to TARGET.
///
/// Paths with no common leading segment are printed unchanged unless
/// `--force` is given. Paths on different Windows drives are always printed
/// unchanged.
#[derive(Args)]
pub struct RelativeCommand {
    /// Absolute path to start from
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Absolute path to reach
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Relativize even when the paths share no leading segment
    #[arg(long)]
    pub force: bool,

    /// Never relativize unrelated paths, overriding configuration
    #[arg(long, conflicts_with = "force")]
    pub no_force: bool,
}

#[derive(Serialize)]
struct RelativeOutput<'a> {
    platform: Platform,
    base: &'a str,
    target: &'a str,
    force: bool,
    relative: &'a str,
}

impl RelativeCommand {
    pub fn execute(self, session: &Session) -> Result<(), CliError> {
        let resolver = session.resolver();

        for path in [&self.base, &self.target] {
            if !resolver.is_absolute_path(path) {
                return Err(CliError::InvalidArguments(format!(
                    "'{path}' is not an absolute {} path",
                    resolver.platform()
                )));
            }
        }

        let force = if self.no_force {
            false
        } else {
            self.force || session.config.force_default()
        };

        let relative = resolver.relative_path(&self.base, &self.target, force);

        session.emit(
            &relative,
            &RelativeOutput {
                platform: resolver.platform(),
                base: &self.base,
                target: &self.target,
                force,
                relative: &relative,
            },
        )
    }
}
