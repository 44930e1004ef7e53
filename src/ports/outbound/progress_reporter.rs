/// ProgressReporter port for reporting progress during a resolution run
///
/// This port abstracts user-facing progress output (e.g., to stderr).
/// Implementations must be shareable across the classification workers.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress of a counted phase
    ///
    /// # Arguments
    /// * `current` - Items handled so far
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
