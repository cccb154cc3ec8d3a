use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::shared::error::NoticeError;

/// Validates that the input path exists, so the failure surfaces as an
/// argument error instead of an engine error halfway through the run
fn parse_existing_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if !path.exists() {
        return Err(format!("path '{}' does not exist", s));
    }
    Ok(path)
}

/// Generate legal notices for open source packages
#[derive(Parser, Debug)]
#[command(name = "ossnotices")]
#[command(version)]
#[command(about = "Generate legal notices for open source packages", long_about = None)]
#[command(after_help = "\
INPUT_PATH can be:
  - A directory containing source code or built packages
  - A package archive (.jar, .war, .whl, .zip, .tar, .gz, .bz2, .egg)

Examples:
  # Scan the current directory
  ossnotices

  # Scan a project tree recursively and save HTML notices
  ossnotices ./project --recursive -f html -o notices.html

  # Process a JAR file
  ossnotices library.jar
")]
pub struct Args {
    /// Directory to scan or archive file to process
    #[arg(value_parser = parse_existing_path, default_value = ".")]
    pub input_path: PathBuf,

    /// Output file path (default: NOTICE.txt / NOTICE.html / NOTICE.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: text, html or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Scan directories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Enable caching (default: enabled)
    #[arg(long, overrides_with = "no_cache")]
    pub cache: bool,

    /// Disable caching
    #[arg(long)]
    pub no_cache: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Rejects the mutually exclusive --quiet/--verbose combination.
    /// Reported as a runtime error, not an argument-parsing error.
    pub fn validate(&self) -> Result<(), NoticeError> {
        if self.quiet && self.verbose {
            return Err(NoticeError::ConflictingFlags);
        }
        Ok(())
    }

    /// Effective cache switch. With both flags given, the last one wins.
    pub fn use_cache(&self) -> bool {
        self.cache || !self.no_cache
    }

    /// True when the user passed either cache flag explicitly, which
    /// takes precedence over the config file
    pub fn cache_flags_explicit(&self) -> bool {
        self.cache || self.no_cache
    }
}
