/// Output format enumeration for notice generation
///
/// This enum represents the supported output formats for notice documents.
/// It belongs in the application layer as it represents an application-level
/// concern that both the CLI (inbound side) and the engine invocation
/// (outbound adapter) need to understand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain-text notices (default)
    #[default]
    Text,
    /// Standalone HTML page
    Html,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    /// File extension used when no output path is given
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }

    /// Default output file name for this format, e.g. `NOTICE.txt`
    pub fn default_output_name(self) -> String {
        format!("NOTICE.{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'html' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
