/// ProgressReporter port for user-facing progress output
///
/// All diagnostics of a run flow through this port (to stderr in the console
/// adapter) so stdout carries nothing but the report.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress of a batch operation, such as thumbnail analysis
    ///
    /// # Arguments
    /// * `current` - Items processed so far
    /// * `total` - Total items
    /// * `message` - Optional message shown next to the bar
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem (skipped record, failed thumbnail, ...)
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
