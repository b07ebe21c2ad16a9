//! Command-line flags.
//!
//! Flags are applied on top of [`AppConfig::default`], so a bare `miniapp`
//! runs with the built-in data directory and subscription date.

use chrono::NaiveDate;

use crate::error::AppError;
use crate::startup::AppConfig;

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(AppConfig),
    Version,
    Help,
}

pub fn usage() -> &'static str {
    "Usage: miniapp [OPTIONS]

Options:
  --expiry YYYY-MM-DD   Expiry date of the mocked subscription
  --data-dir PATH       Directory for settings and logs (default: ~/.miniapp)
  --version             Print version and exit
  --help                Print this help and exit"
}

/// Parse arguments (without the program name) on top of the defaults.
pub fn parse_args<I, S>(args: I) -> Result<CliCommand, AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = AppConfig::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--expiry" => {
                let value = args
                    .next()
                    .ok_or_else(|| AppError::Config("--expiry requires a date".into()))?;
                let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
                    AppError::Config(format!("invalid --expiry value '{}', expected YYYY-MM-DD", value))
                })?;
                config = config.with_subscription_expiry(date);
            }
            "--data-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| AppError::Config("--data-dir requires a path".into()))?;
                config = config.with_data_dir(value);
            }
            other => {
                return Err(AppError::Config(format!("unknown argument '{}'", other)));
            }
        }
    }

    Ok(CliCommand::Run(config))
}
