use crate::config::FetcherConfig;
use crate::errors::AppResult;
use crate::fetcher::Fetcher;
use crate::models::Outcome;
use crate::report;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parsed command-line arguments.
///
/// The endpoint and output directory are fixed; the command line only controls how much
/// diagnostic logging is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub verbose: bool,
}

pub fn build_command() -> Command<'static> {
    Command::new("docfetch")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .after_help("Downloads the documentation bundle into ./documentation.\nSet RUST_LOG for finer log filtering.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log progress information to stderr")
                .action(ArgAction::SetTrue),
        )
}

pub fn args_from_matches(matches: &ArgMatches) -> CliArgs {
    CliArgs {
        verbose: matches.get_one::<bool>("verbose").copied().unwrap_or(false),
    }
}

/// Parses the process arguments, exiting with usage information on invalid input.
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_command().get_matches())
}

/// Runs the fetcher against the built-in documentation endpoint.
pub async fn run() -> AppResult<Outcome> {
    run_with_config(FetcherConfig::default()).await
}

pub async fn run_with_config(config: FetcherConfig) -> AppResult<Outcome> {
    info!(
        url = %config.url,
        output_dir = %config.output_dir.display(),
        "Starting documentation fetch"
    );
    let fetcher = Fetcher::new(config)?;
    let response = fetcher.fetch().await?;
    for line in report::progress_lines(response.kind()) {
        println!("{line}");
    }
    let outcome = fetcher.process(response).await?;
    info!(
        entries = outcome.entries_extracted,
        marker_found = outcome.marker_found,
        "Documentation fetch completed"
    );
    Ok(outcome)
}
