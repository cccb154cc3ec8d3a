use std::path::Path;

/// Archive extensions the engine knows how to unpack.
///
/// Matching is case-sensitive, so `library.JAR` is not recognized.
pub const ARCHIVE_EXTENSIONS: [&str; 8] =
    ["jar", "war", "whl", "zip", "tar", "gz", "bz2", "egg"];

/// Classification of the input path handed to the CLI
///
/// The classification decides which engine operation runs. Anything that
/// is neither a directory nor a recognized archive is rejected before the
/// engine is ever invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A directory to scan for packages
    Directory,
    /// An archive file with a recognized extension
    Archive,
    /// Anything else; never forwarded to the engine
    Unsupported,
}

impl InputKind {
    /// Classify a path by filesystem inspection and extension matching.
    ///
    /// A directory named `vendor.jar` is still a directory; the extension
    /// check only applies to non-directories. Multi-part extensions like
    /// `.tar.gz` match on the final component.
    pub fn classify(path: &Path) -> Self {
        if path.is_dir() {
            return InputKind::Directory;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ARCHIVE_EXTENSIONS.contains(&ext) => InputKind::Archive,
            _ => InputKind::Unsupported,
        }
    }
}
