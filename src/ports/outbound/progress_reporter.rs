/// ProgressReporter port for user-facing progress during a report run
///
/// Diagnostic events go through `tracing`; this port is the human
/// channel (stderr, progress bar).
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the violation list
    ///
    /// # Arguments
    /// * `current` - Violations processed so far
    /// * `total` - Violations in the run
    /// * `message` - Optional label of the component just processed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
