/// Mock implementations for testing
mod mock_notice_engine;
mod mock_progress_reporter;

pub use mock_notice_engine::{EngineCall, MockNoticeEngine};
pub use mock_progress_reporter::MockProgressReporter;
