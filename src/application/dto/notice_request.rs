use std::path::PathBuf;

use super::output_format::OutputFormat;

/// NoticeRequest - Internal request DTO for the notice generation use case
///
/// This DTO represents the internal request structure used within
/// the application layer. It carries everything the use case needs to
/// classify the input and drive the engine.
#[derive(Debug, Clone)]
pub struct NoticeRequest {
    /// Path to the directory or archive to generate notices for
    pub input_path: PathBuf,
    /// Whether a directory scan should descend into subdirectories
    pub recursive: bool,
    /// Format the generated notices should be rendered in
    pub format: OutputFormat,
}

impl NoticeRequest {
    pub fn new(input_path: PathBuf, recursive: bool, format: OutputFormat) -> Self {
        Self {
            input_path,
            recursive,
            format,
        }
    }
}
