use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every declared dependency resolved, or missing ones were tolerated
    Success = 0,
    /// `--fail-on-missing` was given and at least one identity could not be located
    UnresolvedDependencies = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, unreadable directory, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnresolvedDependencies => write!(f, "Unresolved Dependencies (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while reading POM metadata or preparing a resolution run.
///
/// Resolution itself never fails on a single bad POM; these variants surface
/// at adapter boundaries and in the CLI.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("Failed to parse POM file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file is well-formed XML with a <project> root element")]
    PomParse { path: PathBuf, details: String },

    #[error("Failed to read POM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    PomRead { path: PathBuf, details: String },

    #[error("Invalid coordinate '{value}': {reason}\n\n💡 Hint: Use the form groupId:artifactId or groupId:artifactId:version")]
    InvalidCoordinate { value: String, reason: String },

    #[error("Invalid directory: {path}\nReason: {reason}\n\n💡 Hint: Point --poms-dir and --jars-dir at existing directories")]
    InvalidDirectory { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
