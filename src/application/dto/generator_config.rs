use std::path::PathBuf;

/// Cache file used when caching is enabled and no custom path is given
pub const DEFAULT_CACHE_FILE: &str = ".ossnotices.cache.json";

/// GeneratorConfig - Runtime configuration threaded through the generator
///
/// A flat configuration struct assembled by the CLI layer from flags and
/// the optional config file. The only invariant (quiet and verbose being
/// mutually exclusive) is enforced before this struct is constructed.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Forward engine diagnostics and error chains to stderr
    pub verbose: bool,
    /// Suppress all output except errors
    pub quiet: bool,
    /// Let the engine reuse previously resolved package metadata
    pub use_cache: bool,
    /// Custom cache file location, [`DEFAULT_CACHE_FILE`] when None
    pub cache_file: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn new(verbose: bool, quiet: bool, use_cache: bool, cache_file: Option<PathBuf>) -> Self {
        Self {
            verbose,
            quiet,
            use_cache,
            cache_file,
        }
    }

    /// Cache file the engine should be pointed at, or None when caching
    /// is disabled.
    pub fn cache_path(&self) -> Option<PathBuf> {
        if !self.use_cache {
            return None;
        }
        Some(
            self.cache_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_FILE)),
        )
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            quiet: false,
            use_cache: true,
            cache_file: None,
        }
    }
}
