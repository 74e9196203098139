use crate::rapid_scan::domain::ComponentReport;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// RapidScanReport - the assembled report handed to formatters
///
/// `components` holds one entry per input violation, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct RapidScanReport {
    pub metadata: ReportMetadata,
    pub components: Vec<ComponentReport>,
}

impl RapidScanReport {
    pub fn new(components: Vec<ComponentReport>) -> Self {
        Self {
            metadata: ReportMetadata::current(),
            components,
        }
    }

    pub fn has_violations(&self) -> bool {
        !self.components.is_empty()
    }
}

/// Provenance of a report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub tool: String,
    pub version: String,
    pub generated_at: DateTime<Utc>,
}

impl ReportMetadata {
    pub fn current() -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
        }
    }
}
