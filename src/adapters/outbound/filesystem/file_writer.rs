use crate::shared::error::NoticeError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the generated notices to a file
///
/// Writes the engine output verbatim, overwriting any existing file at
/// the output path.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(NoticeError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Writes the content to the output path, truncating any existing file
    pub fn write(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;

        fs::write(&self.output_path, content).map_err(|e| NoticeError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("NOTICE.txt");

        let writer = FileSystemWriter::new(output_path.clone());
        let result = writer.write("test notices");

        assert!(result.is_ok());
        let written_content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(written_content, "test notices");
    }

    #[test]
    fn test_file_writer_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("NOTICE.txt");
        fs::write(&output_path, "stale content that is much longer").unwrap();

        let writer = FileSystemWriter::new(output_path.clone());
        writer.write("fresh").unwrap();

        let written_content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(written_content, "fresh");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/NOTICE.txt");

        let writer = FileSystemWriter::new(output_path);
        let result = writer.write("test notices");

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
    }

    #[test]
    fn test_file_writer_bare_filename_uses_current_directory() {
        // A bare file name has an empty parent, which must not be rejected
        let writer = FileSystemWriter::new(PathBuf::from("NOTICE-test-output.txt"));
        let result = writer.validate_parent_directory();
        assert!(result.is_ok());
    }
}
