use crate::application::dto::{GeneratorConfig, OutputFormat};
use crate::ports::outbound::NoticeEngine;
use crate::shared::error::NoticeError;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;

/// Executable name resolved through PATH when no override is given
pub const DEFAULT_ENGINE_PROGRAM: &str = "purl2notices";

/// Environment variable pointing at an alternative engine executable
pub const ENGINE_PROGRAM_ENV: &str = "PURL2NOTICES";

/// Sentinel written when the engine exits non-zero without any output
pub const NO_PACKAGES_MESSAGE: &str = "No packages with license information found.\n";

/// Engine operation selector, encoded as the --mode argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineMode {
    Scan,
    Archive,
}

impl EngineMode {
    fn as_arg(self) -> &'static str {
        match self {
            EngineMode::Scan => "scan",
            EngineMode::Archive => "archive",
        }
    }
}

/// Purl2NoticesCli adapter for invoking the engine as a child process
///
/// This adapter implements the NoticeEngine port by shelling out to the
/// purl2notices executable, capturing its output without raising on a
/// non-zero exit. Partial output from a failed run is still returned so
/// a best-effort notice file can be written.
pub struct Purl2NoticesCli {
    program: OsString,
    config: GeneratorConfig,
}

impl Purl2NoticesCli {
    /// Creates an adapter bound to the executable named by the
    /// PURL2NOTICES environment variable, or `purl2notices` on PATH.
    pub fn new(config: GeneratorConfig) -> Self {
        let program = std::env::var_os(ENGINE_PROGRAM_ENV)
            .unwrap_or_else(|| OsString::from(DEFAULT_ENGINE_PROGRAM));
        Self { program, config }
    }

    /// Creates an adapter bound to an explicit executable path
    pub fn with_program(program: impl Into<OsString>, config: GeneratorConfig) -> Self {
        Self {
            program: program.into(),
            config,
        }
    }

    fn build_args(
        &self,
        mode: EngineMode,
        path: &Path,
        recursive: bool,
        format: OutputFormat,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            OsString::from("-i"),
            path.as_os_str().to_os_string(),
            OsString::from("--mode"),
            OsString::from(mode.as_arg()),
        ];
        if recursive {
            args.push(OsString::from("--recursive"));
        }
        if let Some(cache_path) = self.config.cache_path() {
            args.push(OsString::from("--cache"));
            args.push(cache_path.into_os_string());
        }
        if self.config.verbose {
            args.push(OsString::from("-v"));
        }
        args.push(OsString::from("-f"));
        args.push(OsString::from(format.to_string()));
        args
    }

    fn run(
        &self,
        mode: EngineMode,
        path: &Path,
        recursive: bool,
        format: OutputFormat,
    ) -> Result<String> {
        let args = self.build_args(mode, path, recursive, format);
        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| {
                let program = self.program.to_string_lossy().into_owned();
                if e.kind() == io::ErrorKind::NotFound {
                    NoticeError::EngineNotFound { program }
                } else {
                    NoticeError::EngineFailure {
                        program,
                        details: e.to_string(),
                    }
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if self.config.verbose {
            let stderr = String::from_utf8_lossy(&output.stderr);
            for line in stderr.lines() {
                eprintln!("purl2notices: {}", line);
            }
        }

        if output.status.success() {
            return Ok(stdout);
        }

        // Non-zero exit with output on stdout is a soft failure; the
        // partial result is still worth writing.
        if !stdout.is_empty() {
            if !self.config.quiet {
                eprintln!(
                    "{}",
                    "Warning: purl2notices exited with errors, keeping partial output".yellow()
                );
            }
            return Ok(stdout);
        }

        if !self.config.quiet {
            eprintln!(
                "{}",
                "Warning: No packages with license information found".yellow()
            );
        }
        Ok(NO_PACKAGES_MESSAGE.to_string())
    }
}

impl NoticeEngine for Purl2NoticesCli {
    fn scan_directory(
        &self,
        path: &Path,
        recursive: bool,
        format: OutputFormat,
    ) -> Result<String> {
        self.run(EngineMode::Scan, path, recursive, format)
    }

    fn process_archive(&self, path: &Path, format: OutputFormat) -> Result<String> {
        self.run(EngineMode::Archive, path, false, format)
    }
}
