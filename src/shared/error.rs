use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report produced (violations only fail the build when requested)
    Success = 0,
    /// Policy violations were found and `--fail-on-violations` was set
    PolicyViolationsFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PolicyViolationsFound => write!(f, "Policy Violations Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for rapid-scan report generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to authenticate with Black Duck at {url}\nDetails: {details}\n\n💡 Hint: Verify the server URL and that the API token is valid and not expired")]
    AuthenticationFailed { url: String, details: String },

    #[error("Rapid scan results not found: {path}\n\n💡 Hint: {suggestion}")]
    ScanResultsNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse rapid scan results: {path}\nDetails: {details}\n\n💡 Hint: Pass the *_BlackDuck_DeveloperMode_Result.json file written by Detect")]
    ScanResultsParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {reason}\n\n💡 Hint: {hint}")]
    InvalidConfiguration { reason: String, hint: String },

    /// Validation error for user supplied values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
