use crate::rapid_scan::domain::{RecommendedVersion, UpgradeReport};

/// Builds a short or long term upgrade entry
pub struct UpgradeReportBuilder;

impl UpgradeReportBuilder {
    pub fn build(recommended_version: Option<&RecommendedVersion>) -> Option<UpgradeReport> {
        recommended_version.map(|recommended| UpgradeReport {
            name: recommended.version_name.clone(),
            href: recommended.version.clone(),
            vulnerability_count: recommended.total_vulnerability_risk(),
        })
    }
}
