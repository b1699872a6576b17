//! Error handling and display for the CLI.

use colored::Colorize;
use fname_names::{InvalidFriendlyNameError, InvalidReason};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    InvalidFriendlyName(#[from] InvalidFriendlyNameError),

    #[error("{invalid} of {total} name(s) failed validation")]
    ValidationFailed { invalid: usize, total: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<CliError>().and_then(hint_for) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint_for(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::InvalidFriendlyName(e) if e.is_hash_error() => {
            Some("Pass the bare hex digest, without an algorithm prefix such as `sha256:`.")
        }
        CliError::InvalidFriendlyName(e) => match e.reason() {
            InvalidReason::InvalidInstanceName { .. } => Some(
                "Namespace, kind and name may only contain letters, digits, `.` and `-`, \
                 and joined with hyphens must fit in 253 characters.",
            ),
            _ => None,
        },
        CliError::ValidationFailed { .. } => None,
    }
}
