use super::component::ResourceMeta;
use serde::Deserialize;

/// A vulnerability known for a component version
/// (`application/vnd.blackducksoftware.vulnerability-4+json`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentVulnerability {
    pub name: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub use_cvss3: bool,
    #[serde(default)]
    pub cvss2: Option<CvssView>,
    #[serde(default)]
    pub cvss3: Option<CvssView>,
    #[serde(rename = "_meta", default)]
    pub meta: ResourceMeta,
}

impl ComponentVulnerability {
    /// Base score of the scheme the record asks for: CVSS 3 when
    /// `useCvss3` is set, CVSS 2 otherwise. No fallback between schemes.
    pub fn base_score(&self) -> Option<f64> {
        let scheme = if self.use_cvss3 {
            self.cvss3.as_ref()
        } else {
            self.cvss2.as_ref()
        };
        scheme.map(|cvss| cvss.base_score)
    }

    pub fn href(&self) -> &str {
        &self.meta.href
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvssView {
    pub base_score: f64,
    #[serde(default)]
    pub severity: Option<String>,
}
