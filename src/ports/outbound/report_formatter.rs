use crate::application::dto::RapidScanReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a rapid scan report
///
/// Implementations turn the normalized report into the text handed to the
/// report consumer (pull request comment, file, stdout).
pub trait ReportFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &RapidScanReport) -> Result<String>;
}
