use serde::Serialize;

/// Normalized report entry, one per input policy violation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReport {
    pub violated_policies: Vec<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub licenses: Vec<LicenseReport>,
    pub vulnerabilities: Vec<VulnerabilityReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_term_upgrade: Option<UpgradeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_term_upgrade: Option<UpgradeReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseReport {
    pub name: String,
    pub href: String,
    pub violates_policy: bool,
}

/// `href`, `cvss_score` and `severity` are only known when the full
/// vulnerability list was fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityReport {
    pub name: String,
    pub violates_policy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvss_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeReport {
    pub name: String,
    pub href: String,
    pub vulnerability_count: u64,
}
