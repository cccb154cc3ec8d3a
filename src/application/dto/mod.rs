/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the dispatch logic isolated.
mod generator_config;
mod input_kind;
mod notice_request;
mod output_format;

pub use generator_config::{GeneratorConfig, DEFAULT_CACHE_FILE};
pub use input_kind::{InputKind, ARCHIVE_EXTENSIONS};
pub use notice_request::NoticeRequest;
pub use output_format::OutputFormat;
