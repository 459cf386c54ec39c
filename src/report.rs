//! Console rendering of a run's result.
//!
//! Status lines go to stdout; diagnostic logging stays on stderr through `tracing`.

use crate::constants::{MSG_DOWNLOADING, MSG_ERROR_PREFIX, MSG_EXPIRED, MSG_UNEXPECTED_JSON};
use crate::errors::{AppError, AppResult};
use crate::models::{Outcome, ResponseKind};
use std::process::ExitCode;

/// Lines printed as soon as the response is classified, before any extraction.
pub fn progress_lines(kind: ResponseKind) -> Vec<String> {
    match kind {
        ResponseKind::Binary => vec![MSG_DOWNLOADING.to_string()],
        ResponseKind::Json => Vec::new(),
    }
}

pub fn success_lines(outcome: &Outcome) -> Vec<String> {
    let marker = &outcome.marker_file;
    let marker_line = if outcome.marker_found {
        format!("Found '{marker}'. Please follow its instructions for implementing the project.")
    } else {
        format!(
            "No '{marker}' found. Proceed with project implementation based on the other documents."
        )
    };
    vec![
        format!(
            "Documentation downloaded and extracted to '{}'.",
            outcome.output_dir.display()
        ),
        marker_line,
    ]
}

/// Lines printed for a failed run.
///
/// The two JSON outcomes get their guidance text; every other failure is a single line
/// with the error prefix.
pub fn failure_lines(err: &AppError) -> Vec<String> {
    match err {
        AppError::UrlExpired { message } => vec![MSG_EXPIRED.to_string(), message.clone()],
        AppError::UnexpectedJson { body } => vec![MSG_UNEXPECTED_JSON.to_string(), body.clone()],
        other => vec![format!("{MSG_ERROR_PREFIX} {other}")],
    }
}

/// Numeric exit status: `0` for any extracted run, the error's code otherwise.
pub fn exit_status(result: &AppResult<Outcome>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => e.exit_code(),
    }
}

/// Prints the lines for `result` and returns the matching process exit code.
pub fn print_result(result: &AppResult<Outcome>) -> ExitCode {
    let lines = match result {
        Ok(outcome) => success_lines(outcome),
        Err(e) => failure_lines(e),
    };
    for line in lines {
        println!("{line}");
    }
    ExitCode::from(exit_status(result))
}
