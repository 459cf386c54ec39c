use docfetch::errors::AppError;
use docfetch::{cli, logging, report};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::parse_args();
    if let Err(e) = logging::init_logging(args.verbose) {
        return report::print_result(&Err(e));
    }

    let result = tokio::runtime::Runtime::new()
        .map_err(|e| AppError::IoError(e.to_string()))
        .and_then(|rt| rt.block_on(cli::run()));
    report::print_result(&result)
}
