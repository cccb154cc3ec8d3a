/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (engine executable, console).
pub mod notice_engine;
pub mod progress_reporter;

pub use notice_engine::NoticeEngine;
pub use progress_reporter::ProgressReporter;
