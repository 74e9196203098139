use serde::Deserialize;
use std::collections::BTreeMap;

/// Response of `<component version>/upgrade-guidance`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeGuidance {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub short_term: Option<RecommendedVersion>,
    #[serde(default)]
    pub long_term: Option<RecommendedVersion>,
}

/// A recommended upgrade target
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedVersion {
    /// Link to the recommended component version
    pub version: String,
    pub version_name: String,
    /// Remaining known vulnerabilities by severity label
    #[serde(default)]
    pub vulnerability_risk: BTreeMap<String, u64>,
}

impl RecommendedVersion {
    /// Total remaining vulnerabilities across all severity buckets
    pub fn total_vulnerability_risk(&self) -> u64 {
        self.vulnerability_risk.values().sum()
    }
}
