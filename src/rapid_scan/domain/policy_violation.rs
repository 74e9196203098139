use super::component::ResourceMeta;
use serde::Deserialize;

/// One rule violation reported by a Detect rapid scan for a component version.
///
/// Deserialized from the `*_BlackDuck_DeveloperMode_Result.json` array.
/// Immutable input to the report pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyViolation {
    pub component_name: String,
    pub version_name: String,
    /// Free-text identifier such as `maven:org.apache.commons:commons-text:1.9`
    pub component_identifier: String,
    #[serde(default)]
    pub violating_policy_names: Vec<String>,
    #[serde(default)]
    pub policy_violation_vulnerabilities: Vec<ViolatingVulnerability>,
    #[serde(default)]
    pub policy_violation_licenses: Vec<ViolatingLicense>,
    #[serde(rename = "_meta", default)]
    pub meta: Option<ResourceMeta>,
}

impl PolicyViolation {
    /// `"<component> <version>"`, the label shown in reports
    pub fn display_name(&self) -> String {
        format!("{} {}", self.component_name, self.version_name)
    }
}

/// A vulnerability that caused the violation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViolatingVulnerability {
    pub name: String,
}

/// A license that caused the violation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolatingLicense {
    pub license_name: String,
    #[serde(rename = "_meta", default)]
    pub meta: ResourceMeta,
}

impl ViolatingLicense {
    pub fn href(&self) -> &str {
        &self.meta.href
    }
}
