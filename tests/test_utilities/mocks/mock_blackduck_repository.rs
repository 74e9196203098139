use async_trait::async_trait;
use detect_rapid_report::prelude::*;
use detect_rapid_report::rapid_scan::domain::{
    ComponentSearchResult, ComponentVersion, ComponentVulnerability, ItemArray, UpgradeGuidance,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock BlackDuckRepository serving a catalog built from JSON fixtures
///
/// Entries are keyed by component identifier; the version href of an
/// entry is the link its search hit points to. Call counters are shared
/// between clones so tests can inspect them after handing a clone to a
/// use case.
#[derive(Clone, Default)]
pub struct MockBlackDuckRepository {
    versions: HashMap<String, ComponentVersion>,
    guidance: HashMap<String, UpgradeGuidance>,
    vulnerabilities: HashMap<String, Vec<ComponentVulnerability>>,
    failing_guidance: HashSet<String>,
    failing_vulnerabilities: HashSet<String>,
    enabled_policy_count: Option<u64>,
    fail_policy_rules: bool,
    fail_authentication: bool,
    authentications: Arc<AtomicUsize>,
    searches: Arc<AtomicUsize>,
    version_fetches: Arc<AtomicUsize>,
}

impl MockBlackDuckRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version_href(identifier: &str) -> String {
        format!("https://blackduck.test/api/components/{}/versions/1", identifier)
    }

    /// Registers a component version with the given licenses `(name, href)`
    pub fn with_component(mut self, identifier: &str, licenses: &[(&str, &str)]) -> Self {
        let licenses: Vec<serde_json::Value> = licenses
            .iter()
            .map(|(name, href)| serde_json::json!({ "name": name, "license": href }))
            .collect();
        let version = serde_json::from_value(serde_json::json!({
            "license": { "licenses": licenses },
            "_meta": { "href": Self::version_href(identifier) }
        }))
        .unwrap();
        self.versions.insert(identifier.to_string(), version);
        self
    }

    /// Registers short-term upgrade guidance with a vulnerability risk map
    pub fn with_short_term_upgrade(
        mut self,
        identifier: &str,
        version_name: &str,
        risk: serde_json::Value,
    ) -> Self {
        let guidance = serde_json::from_value(serde_json::json!({
            "version": Self::version_href(identifier),
            "shortTerm": {
                "version": format!("{}/upgrade", Self::version_href(identifier)),
                "versionName": version_name,
                "vulnerabilityRisk": risk
            }
        }))
        .unwrap();
        self.guidance.insert(Self::version_href(identifier), guidance);
        self
    }

    /// Registers the known vulnerabilities `(name, cvss2, cvss3, use_cvss3)`
    pub fn with_vulnerabilities(
        mut self,
        identifier: &str,
        vulnerabilities: &[(&str, f64, f64, bool)],
    ) -> Self {
        let vulnerabilities = vulnerabilities
            .iter()
            .map(|(name, cvss2, cvss3, use_cvss3)| {
                serde_json::from_value(serde_json::json!({
                    "name": name,
                    "severity": "HIGH",
                    "useCvss3": use_cvss3,
                    "cvss2": { "baseScore": cvss2, "severity": "MEDIUM" },
                    "cvss3": { "baseScore": cvss3, "severity": "HIGH" },
                    "_meta": { "href": format!("https://blackduck.test/api/vulnerabilities/{}", name) }
                }))
                .unwrap()
            })
            .collect();
        self.vulnerabilities
            .insert(Self::version_href(identifier), vulnerabilities);
        self
    }

    pub fn with_failing_guidance(mut self, identifier: &str) -> Self {
        self.failing_guidance.insert(Self::version_href(identifier));
        self
    }

    pub fn with_failing_vulnerabilities(mut self, identifier: &str) -> Self {
        self.failing_vulnerabilities
            .insert(Self::version_href(identifier));
        self
    }

    pub fn with_enabled_policies(mut self, count: u64) -> Self {
        self.enabled_policy_count = Some(count);
        self
    }

    pub fn with_failing_policy_rules(mut self) -> Self {
        self.fail_policy_rules = true;
        self
    }

    pub fn with_failing_authentication(mut self) -> Self {
        self.fail_authentication = true;
        self
    }

    pub fn authentication_count(&self) -> usize {
        self.authentications.load(Ordering::SeqCst)
    }

    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    pub fn version_fetch_count(&self) -> usize {
        self.version_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlackDuckRepository for MockBlackDuckRepository {
    async fn authenticate(&self) -> Result<BearerToken> {
        self.authentications.fetch_add(1, Ordering::SeqCst);
        if self.fail_authentication {
            anyhow::bail!("401 Unauthorized");
        }
        Ok(BearerToken::new("mock-bearer-token"))
    }

    async fn search_components(
        &self,
        _token: &BearerToken,
        identifier: &str,
        limit: usize,
    ) -> Result<Option<ItemArray<ComponentSearchResult>>> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        let items: Vec<serde_json::Value> = self
            .versions
            .get(identifier)
            .map(|version| vec![serde_json::json!({ "version": version.href() })])
            .unwrap_or_default();
        let page = serde_json::from_value(serde_json::json!({
            "totalCount": items.len(),
            "items": items.into_iter().take(limit).collect::<Vec<_>>()
        }))?;
        Ok(Some(page))
    }

    async fn get_component_version(
        &self,
        _token: &BearerToken,
        version_link: &str,
    ) -> Result<Option<ComponentVersion>> {
        self.version_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .versions
            .values()
            .find(|version| version.href() == version_link)
            .cloned())
    }

    async fn get_upgrade_guidance(
        &self,
        _token: &BearerToken,
        component_version_href: &str,
    ) -> Result<Option<UpgradeGuidance>> {
        if self.failing_guidance.contains(component_version_href) {
            anyhow::bail!("500 Internal Server Error");
        }
        Ok(self.guidance.get(component_version_href).cloned())
    }

    async fn get_vulnerabilities(
        &self,
        _token: &BearerToken,
        component_version_href: &str,
    ) -> Result<Option<ItemArray<ComponentVulnerability>>> {
        if self.failing_vulnerabilities.contains(component_version_href) {
            anyhow::bail!("connection reset by peer");
        }
        Ok(self
            .vulnerabilities
            .get(component_version_href)
            .map(|items| ItemArray {
                total_count: Some(items.len() as u64),
                items: items.clone(),
            }))
    }

    async fn get_policy_rules(
        &self,
        _token: &BearerToken,
        _limit: usize,
        _enabled: Option<bool>,
    ) -> Result<Option<ItemArray<serde_json::Value>>> {
        if self.fail_policy_rules {
            anyhow::bail!("502 Bad Gateway");
        }
        Ok(self.enabled_policy_count.map(|count| ItemArray {
            total_count: Some(count),
            items: Vec::new(),
        }))
    }
}
