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
    /// Success - notices were written, even if the engine only produced
    /// partial output
    Success = 0,
    /// Runtime failure (unsupported input, missing engine, write error, ...)
    Failure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
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
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for notice generation.
///
/// Uses thiserror to derive Display and Error traits. Errors the user can
/// act on carry a 💡 hint line after the message itself.
#[derive(Debug, Error)]
pub enum NoticeError {
    /// Mutually exclusive verbosity flags were both given
    #[error("Cannot use --quiet and --verbose together")]
    ConflictingFlags,

    #[error("{path} is not a supported archive format\n\n💡 Hint: supported archive extensions are .jar, .war, .whl, .zip, .tar, .gz, .bz2 and .egg")]
    UnsupportedInput { path: PathBuf },

    #[error("purl2notices executable not found: {program}\n\n💡 Hint: install it with 'pip install purl2notices', or point the PURL2NOTICES environment variable at the executable")]
    EngineNotFound { program: String },

    #[error("Failed to run {program}\nDetails: {details}\n\n💡 Hint: Please verify that the executable is runnable on this system")]
    EngineFailure { program: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
