use crate::application::dto::OutputFormat;
use crate::shared::Result;
use std::path::Path;

/// NoticeEngine port for delegating notice generation
///
/// This port abstracts the external purl2notices engine that performs
/// all package resolution, license extraction and notice rendering.
/// The dispatch core only ever sees the rendered output string.
pub trait NoticeEngine {
    /// Scans a directory for packages and generates notices for them
    ///
    /// # Arguments
    /// * `path` - Directory to scan
    /// * `recursive` - Whether the scan descends into subdirectories
    /// * `format` - Format the notices should be rendered in
    ///
    /// # Returns
    /// The rendered notices, or a fixed sentinel when the engine found
    /// no packages with license information
    ///
    /// # Errors
    /// Returns an error if:
    /// - The engine executable cannot be located
    /// - The engine cannot be started at all
    fn scan_directory(&self, path: &Path, recursive: bool, format: OutputFormat)
        -> Result<String>;

    /// Processes a single archive file and generates notices for it
    ///
    /// # Arguments
    /// * `path` - Archive file to process
    /// * `format` - Format the notices should be rendered in
    ///
    /// # Returns
    /// The rendered notices, or a fixed sentinel when the engine found
    /// no packages with license information
    ///
    /// # Errors
    /// Returns an error if:
    /// - The engine executable cannot be located
    /// - The engine cannot be started at all
    fn process_archive(&self, path: &Path, format: OutputFormat) -> Result<String>;
}
