use crate::rapid_scan::domain::PolicyViolation;
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::path::Path;

/// PolicyViolationReader port for loading rapid scan output
///
/// This port abstracts where the Detect rapid scan result comes from.
pub trait PolicyViolationReader {
    /// Reads the raw rapid scan result document
    ///
    /// # Errors
    /// Returns an error if the document does not exist or cannot be read
    fn read_scan_results(&self, path: &Path) -> Result<String>;

    /// Reads and parses the rapid scan result into policy violations
    ///
    /// The document is a JSON array with one entry per violating component.
    fn read_violations(&self, path: &Path) -> Result<Vec<PolicyViolation>> {
        let content = self.read_scan_results(path)?;
        let violations: Vec<PolicyViolation> =
            serde_json::from_str(&content).map_err(|e| ReportError::ScanResultsParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        Ok(violations)
    }
}
