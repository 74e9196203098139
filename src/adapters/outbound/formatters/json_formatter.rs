use crate::application::dto::RapidScanReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable output
///
/// Serializes the report envelope (metadata plus components) as pretty JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RapidScanReport) -> Result<String> {
        let json = serde_json::to_string_pretty(report)?;
        Ok(json)
    }
}
