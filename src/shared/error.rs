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
    /// Success - every package resolved, or degraded entries were tolerated
    Success = 0,
    /// Some packages could not be looked up and `--strict` was requested
    UnresolvedPackages = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed manifest, file I/O error, etc.)
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
            ExitCode::UnresolvedPackages => write!(f, "Unresolved Packages (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Fatal, user-facing errors.
///
/// Anything in here aborts the run. Registry trouble never ends up here;
/// see [`LookupError`].
#[derive(Debug, Error)]
pub enum DeptreeError {
    #[error("Manifest file not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse manifest: {path}\nDetails: {details}\n\n💡 Hint: The manifest must be a packages.config document with <package id=\"..\" version=\"..\"/> entries")]
    ManifestMalformed { path: PathBuf, details: String },

    #[error("Invalid manifest path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid packages.config file")]
    InvalidManifestPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for user supplied values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

/// Soft failures raised while talking to a registry.
///
/// These are contained: a `SourceUnreachable` makes the client try the next
/// source, an `InvalidDependency` drops one declared edge, and a
/// `PackageLookupFailed` leaves the package in the result table with no
/// dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Source {source_url} is unreachable: {reason}")]
    SourceUnreachable { source_url: String, reason: String },

    #[error("{package} declares a dependency with an unusable id '{dependency}': {reason}")]
    InvalidDependency {
        package: String,
        dependency: String,
        reason: String,
    },

    #[error("Failed to fetch {id} {version} from any source{}", format_causes(.causes))]
    PackageLookupFailed {
        id: String,
        version: String,
        causes: Vec<String>,
    },
}

fn format_causes(causes: &[String]) -> String {
    if causes.is_empty() {
        String::new()
    } else {
        format!(" ({})", causes.join("; "))
    }
}
