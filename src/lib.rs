//! ossnotices - Legal notice generation for open source packages
//!
//! This library provides a thin front end for the purl2notices engine:
//! it classifies the input path, drives the engine as a child process and
//! writes the rendered notices to a file, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Application Layer** (`application`): Use case and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use ossnotices::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let config = GeneratorConfig::default();
//! let engine = Purl2NoticesCli::new(config);
//! let progress_reporter = ConsoleProgressReporter::new(false);
//!
//! // Create use case
//! let use_case = GenerateNoticesUseCase::new(engine, progress_reporter);
//!
//! // Execute
//! let request = NoticeRequest::new(PathBuf::from("."), false, OutputFormat::Text);
//! let notices = use_case.execute(request)?;
//!
//! // Write output
//! let writer = FileSystemWriter::new(PathBuf::from("NOTICE.txt"));
//! writer.write(&notices)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemWriter;
    pub use crate::adapters::outbound::process::{
        Purl2NoticesCli, DEFAULT_ENGINE_PROGRAM, ENGINE_PROGRAM_ENV, NO_PACKAGES_MESSAGE,
    };
    pub use crate::application::dto::{
        GeneratorConfig, InputKind, NoticeRequest, OutputFormat, ARCHIVE_EXTENSIONS,
        DEFAULT_CACHE_FILE,
    };
    pub use crate::application::use_cases::GenerateNoticesUseCase;
    pub use crate::cli::Args;
    pub use crate::ports::outbound::{NoticeEngine, ProgressReporter};
    pub use crate::shared::error::{ExitCode, NoticeError};
    pub use crate::shared::Result;
}
