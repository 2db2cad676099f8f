/// ProgressReporter port for operator-facing output
///
/// Progress, warnings and completion messages all go through here so that
/// they stay off stdout, where the report is written.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value, `0` when unknown (spinner)
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    ///
    /// Warnings are never suppressed, even in quiet mode.
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
