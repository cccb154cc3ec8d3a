use crate::application::dto::{InputKind, NoticeRequest};
use crate::ports::outbound::{NoticeEngine, ProgressReporter};
use crate::shared::error::NoticeError;
use crate::shared::Result;

/// GenerateNoticesUseCase - Core use case for notice generation
///
/// This use case classifies the input path and dispatches to the matching
/// engine operation, using generic dependency injection for the engine and
/// progress reporting.
///
/// # Type Parameters
/// * `E` - NoticeEngine implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateNoticesUseCase<E, PR> {
    engine: E,
    progress_reporter: PR,
}

impl<E, PR> GenerateNoticesUseCase<E, PR>
where
    E: NoticeEngine,
    PR: ProgressReporter,
{
    /// Creates a new GenerateNoticesUseCase with injected dependencies
    pub fn new(engine: E, progress_reporter: PR) -> Self {
        Self {
            engine,
            progress_reporter,
        }
    }

    /// Executes the notice generation use case
    ///
    /// # Arguments
    /// * `request` - Notice request containing input path, recursion flag and format
    ///
    /// # Returns
    /// The rendered notices, ready to be written to the output file verbatim
    ///
    /// # Errors
    /// Returns an error if:
    /// - The input path is neither a directory nor a recognized archive
    /// - The engine executable cannot be located or started
    pub fn execute(&self, request: NoticeRequest) -> Result<String> {
        // Step 1: Classify the input path
        let kind = InputKind::classify(&request.input_path);

        // Step 2: Dispatch to the matching engine operation
        let result = match kind {
            InputKind::Directory => {
                self.progress_reporter.report(&format!(
                    "Scanning directory: {}",
                    request.input_path.display()
                ));
                self.progress_reporter.begin_task("Scanning directory...");
                self.engine
                    .scan_directory(&request.input_path, request.recursive, request.format)
            }
            InputKind::Archive => {
                self.progress_reporter.report(&format!(
                    "Processing archive: {}",
                    request.input_path.display()
                ));
                self.progress_reporter.begin_task("Processing archive...");
                self.engine
                    .process_archive(&request.input_path, request.format)
            }
            InputKind::Unsupported => {
                // Rejected before the engine is ever invoked
                return Err(NoticeError::UnsupportedInput {
                    path: request.input_path,
                }
                .into());
            }
        };

        // Clear the spinner on the error path as well
        self.progress_reporter.end_task();

        result
    }
}
