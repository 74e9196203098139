use crate::ports::outbound::PolicyViolationReader;
use crate::shared::error::ReportError;
use crate::shared::security::{validate_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading the rapid scan result from disk
///
/// This adapter implements the PolicyViolationReader port.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyViolationReader for FileSystemReader {
    fn read_scan_results(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ReportError::ScanResultsNotFound {
                path: path.to_path_buf(),
                suggestion: "Run Detect with --detect.blackduck.scan.mode=RAPID and pass the \
                             *_BlackDuck_DeveloperMode_Result.json file from its scan output directory."
                    .to_string(),
            }
            .into());
        }

        validate_input_file(path, "rapid scan result", MAX_FILE_SIZE)?;

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read rapid scan result: {}", e))
    }
}
