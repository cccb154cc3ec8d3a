/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while the engine is running.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Starts an indeterminate task indicator
    ///
    /// # Arguments
    /// * `description` - Short description shown next to the indicator
    fn begin_task(&self, description: &str);

    /// Ends the current task indicator, if any
    fn end_task(&self);
}
