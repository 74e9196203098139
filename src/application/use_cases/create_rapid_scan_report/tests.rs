use super::*;
use crate::rapid_scan::domain::component::ComponentLicenseSet;
use crate::rapid_scan::domain::{
    ComponentLicense, ComponentSearchResult, CvssView, ItemArray, RecommendedVersion,
    ResourceMeta, ViolatingLicense, ViolatingVulnerability,
};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

// Mock implementations for testing

/// Catalog snapshot keyed by component identifier and version href
#[derive(Default)]
struct MockBlackDuckRepository {
    components: HashMap<String, ComponentVersion>,
    guidance: HashMap<String, UpgradeGuidance>,
    vulnerabilities: HashMap<String, Vec<ComponentVulnerability>>,
    failing_guidance: HashSet<String>,
    failing_vulnerabilities: HashSet<String>,
    failing_searches: HashSet<String>,
    fail_authentication: bool,
    /// Identifiers whose lookups are slowed down, to shuffle completion order
    slow_searches: HashMap<String, u64>,
    authentications: AtomicUsize,
    searches: Mutex<Vec<String>>,
    enabled_policies: Option<u64>,
    failing_policy_rules: bool,
}

impl MockBlackDuckRepository {
    fn new() -> Self {
        Self::default()
    }

    fn href_for(identifier: &str) -> String {
        format!("https://bd/api/components/{}/versions/1", identifier)
    }

    fn with_component(mut self, identifier: &str, licenses: &[(&str, &str)]) -> Self {
        let href = Self::href_for(identifier);
        self.components.insert(
            identifier.to_string(),
            ComponentVersion {
                license: ComponentLicenseSet {
                    licenses: licenses
                        .iter()
                        .map(|(name, link)| ComponentLicense {
                            name: name.to_string(),
                            license: link.to_string(),
                        })
                        .collect(),
                },
                meta: ResourceMeta { href },
            },
        );
        self
    }

    fn with_guidance(mut self, identifier: &str, short_term_risk: &[(&str, u64)]) -> Self {
        self.guidance.insert(
            Self::href_for(identifier),
            UpgradeGuidance {
                version: Some(Self::href_for(identifier)),
                short_term: Some(RecommendedVersion {
                    version: format!("{}/short", Self::href_for(identifier)),
                    version_name: "short-term".to_string(),
                    vulnerability_risk: short_term_risk
                        .iter()
                        .map(|(severity, count)| (severity.to_string(), *count))
                        .collect::<BTreeMap<_, _>>(),
                }),
                long_term: None,
            },
        );
        self
    }

    fn with_vulnerabilities(mut self, identifier: &str, vulns: Vec<ComponentVulnerability>) -> Self {
        self.vulnerabilities.insert(Self::href_for(identifier), vulns);
        self
    }

    fn with_failing_guidance(mut self, identifier: &str) -> Self {
        self.failing_guidance.insert(Self::href_for(identifier));
        self
    }

    fn with_failing_vulnerabilities(mut self, identifier: &str) -> Self {
        self.failing_vulnerabilities
            .insert(Self::href_for(identifier));
        self
    }

    fn with_failing_search(mut self, identifier: &str) -> Self {
        self.failing_searches.insert(identifier.to_string());
        self
    }

    fn with_slow_search(mut self, identifier: &str, millis: u64) -> Self {
        self.slow_searches.insert(identifier.to_string(), millis);
        self
    }

    fn with_enabled_policies(mut self, count: u64) -> Self {
        self.enabled_policies = Some(count);
        self
    }

    fn with_failing_policy_rules(mut self) -> Self {
        self.failing_policy_rules = true;
        self
    }
}

#[async_trait]
impl BlackDuckRepository for MockBlackDuckRepository {
    async fn authenticate(&self) -> Result<BearerToken> {
        self.authentications.fetch_add(1, Ordering::SeqCst);
        if self.fail_authentication {
            anyhow::bail!("401 Unauthorized");
        }
        Ok(BearerToken::new("bearer"))
    }

    async fn search_components(
        &self,
        token: &BearerToken,
        identifier: &str,
        _limit: usize,
    ) -> Result<Option<ItemArray<ComponentSearchResult>>> {
        assert_eq!(token.as_str(), "bearer");
        self.searches.lock().unwrap().push(identifier.to_string());
        if let Some(millis) = self.slow_searches.get(identifier) {
            tokio::time::sleep(Duration::from_millis(*millis)).await;
        }
        if self.failing_searches.contains(identifier) {
            anyhow::bail!("503 Service Unavailable");
        }
        let items = self
            .components
            .get(identifier)
            .map(|version| {
                vec![ComponentSearchResult {
                    version: Some(version.href().to_string()),
                }]
            })
            .unwrap_or_default();
        Ok(Some(ItemArray {
            total_count: Some(items.len() as u64),
            items,
        }))
    }

    async fn get_component_version(
        &self,
        _token: &BearerToken,
        version_link: &str,
    ) -> Result<Option<ComponentVersion>> {
        Ok(self
            .components
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
        if self.failing_policy_rules {
            anyhow::bail!("502 Bad Gateway");
        }
        Ok(self.enabled_policies.map(|count| ItemArray {
            total_count: Some(count),
            items: Vec::new(),
        }))
    }
}

/// Mock ProgressReporter that captures messages
#[derive(Default)]
struct MockProgressReporter {
    messages: Mutex<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.messages.lock().unwrap().push(format!(
            "Progress: {}/{} - {}",
            current,
            total,
            message.unwrap_or_default()
        ));
    }

    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}

fn violation(identifier: &str) -> PolicyViolation {
    PolicyViolation {
        component_name: identifier.to_string(),
        version_name: "1.0.0".to_string(),
        component_identifier: identifier.to_string(),
        violating_policy_names: vec![format!("policy-for-{}", identifier)],
        policy_violation_vulnerabilities: vec![ViolatingVulnerability {
            name: "CVE-2024-0001".to_string(),
        }],
        policy_violation_licenses: vec![ViolatingLicense {
            license_name: "GPL".to_string(),
            meta: ResourceMeta {
                href: "https://bd/api/licenses/gpl".to_string(),
            },
        }],
        meta: None,
    }
}

fn known_vulnerability(name: &str, cvss3: f64, cvss2: f64) -> ComponentVulnerability {
    ComponentVulnerability {
        name: name.to_string(),
        severity: Some("HIGH".to_string()),
        use_cvss3: true,
        cvss2: Some(CvssView {
            base_score: cvss2,
            severity: None,
        }),
        cvss3: Some(CvssView {
            base_score: cvss3,
            severity: None,
        }),
        meta: ResourceMeta {
            href: format!("https://bd/api/vulnerabilities/{}", name),
        },
    }
}

fn use_case(
    repo: MockBlackDuckRepository,
) -> CreateRapidScanReportUseCase<MockBlackDuckRepository, MockProgressReporter> {
    CreateRapidScanReportUseCase::new(repo, MockProgressReporter::default())
}

#[tokio::test]
async fn test_execute_preserves_length_and_order() {
    let repo = MockBlackDuckRepository::new()
        .with_component("b", &[("MIT", "L1")])
        .with_component("c", &[]);
    let use_case = use_case(repo);
    let violations = vec![violation("a"), violation("b"), violation("c")];

    let reports = use_case
        .execute(&violations, &ReportRequest::default())
        .await
        .unwrap();

    assert_eq!(reports.len(), 3);
    let names: Vec<&str> = reports.iter().map(|report| report.name.as_str()).collect();
    assert_eq!(names, vec!["a 1.0.0", "b 1.0.0", "c 1.0.0"]);
    assert_eq!(reports[1].violated_policies, vec!["policy-for-b".to_string()]);
}

#[tokio::test]
async fn test_execute_authenticates_once_per_run() {
    let use_case = use_case(MockBlackDuckRepository::new());
    let violations = vec![violation("a"), violation("b")];

    use_case
        .execute(&violations, &ReportRequest::default())
        .await
        .unwrap();

    assert_eq!(use_case.repository.authentications.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_execute_empty_violation_list() {
    let use_case = use_case(MockBlackDuckRepository::new());

    let reports = use_case
        .execute(&[], &ReportRequest::default())
        .await
        .unwrap();

    assert!(reports.is_empty());
}

#[tokio::test]
async fn test_unresolved_component_uses_violation_data_only() {
    let use_case = use_case(MockBlackDuckRepository::new());

    let reports = use_case
        .execute(&[violation("unknown")], &ReportRequest::default())
        .await
        .unwrap();

    let report = &reports[0];
    assert!(report.href.is_none());
    assert_eq!(report.licenses.len(), 1);
    assert_eq!(report.licenses[0].name, "GPL");
    assert!(report.licenses[0].violates_policy);
    assert_eq!(report.vulnerabilities.len(), 1);
    assert!(report.vulnerabilities[0].violates_policy);
    assert!(report.vulnerabilities[0].cvss_score.is_none());
    assert!(report.short_term_upgrade.is_none());
    assert!(report.long_term_upgrade.is_none());
}

#[tokio::test]
async fn test_resolved_component_is_fully_enriched() {
    let repo = MockBlackDuckRepository::new()
        .with_component("jackson", &[("MIT", "L1"), ("GPL", "L2")])
        .with_guidance("jackson", &[("critical", 2), ("high", 3), ("medium", 0)])
        .with_vulnerabilities(
            "jackson",
            vec![
                known_vulnerability("CVE-2024-0001", 7.5, 4.0),
                known_vulnerability("CVE-2024-0002", 5.0, 3.0),
            ],
        );
    let use_case = use_case(repo);

    let reports = use_case
        .execute(&[violation("jackson")], &ReportRequest::default())
        .await
        .unwrap();

    let report = &reports[0];
    assert_eq!(
        report.href.as_deref(),
        Some("https://bd/api/components/jackson/versions/1")
    );
    let flags: Vec<(&str, bool)> = report
        .licenses
        .iter()
        .map(|license| (license.name.as_str(), license.violates_policy))
        .collect();
    assert_eq!(flags, vec![("MIT", false), ("GPL", true)]);

    assert_eq!(report.vulnerabilities.len(), 2);
    assert!(report.vulnerabilities[0].violates_policy);
    assert_eq!(report.vulnerabilities[0].cvss_score, Some(7.5));
    assert!(!report.vulnerabilities[1].violates_policy);

    let short_term = report.short_term_upgrade.as_ref().unwrap();
    assert_eq!(short_term.vulnerability_count, 5);
    assert!(report.long_term_upgrade.is_none());
}

#[tokio::test]
async fn test_upgrade_guidance_failure_is_isolated() {
    let repo = MockBlackDuckRepository::new()
        .with_component("a", &[("GPL", "L2")])
        .with_failing_guidance("a")
        .with_vulnerabilities("a", vec![known_vulnerability("CVE-2024-0001", 9.1, 5.0)])
        .with_component("b", &[])
        .with_guidance("b", &[("high", 1)]);
    let use_case = use_case(repo);

    let reports = use_case
        .execute(&[violation("a"), violation("b")], &ReportRequest::default())
        .await
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports[0].short_term_upgrade.is_none());
    assert!(reports[0].long_term_upgrade.is_none());
    assert!(reports[0].licenses[0].violates_policy);
    assert_eq!(reports[0].vulnerabilities[0].cvss_score, Some(9.1));
    assert_eq!(
        reports[1]
            .short_term_upgrade
            .as_ref()
            .unwrap()
            .vulnerability_count,
        1
    );
}

#[tokio::test]
async fn test_missing_upgrade_guidance_is_absent() {
    let repo = MockBlackDuckRepository::new().with_component("a", &[]);
    let use_case = use_case(repo);

    let reports = use_case
        .execute(&[violation("a")], &ReportRequest::default())
        .await
        .unwrap();

    assert!(reports[0].href.is_some());
    assert!(reports[0].short_term_upgrade.is_none());
}

#[tokio::test]
async fn test_vulnerability_failure_falls_back_to_violation_data() {
    let repo = MockBlackDuckRepository::new()
        .with_component("a", &[("MIT", "L1")])
        .with_failing_vulnerabilities("a")
        .with_guidance("a", &[]);
    let use_case = use_case(repo);

    let reports = use_case
        .execute(&[violation("a")], &ReportRequest::default())
        .await
        .unwrap();

    let report = &reports[0];
    assert_eq!(report.vulnerabilities.len(), 1);
    assert_eq!(report.vulnerabilities[0].name, "CVE-2024-0001");
    assert!(report.vulnerabilities[0].violates_policy);
    assert!(report.vulnerabilities[0].href.is_none());
    assert_eq!(report.short_term_upgrade.as_ref().unwrap().vulnerability_count, 0);
}

#[tokio::test]
async fn test_authentication_failure_aborts() {
    let mut repo = MockBlackDuckRepository::new();
    repo.fail_authentication = true;
    let use_case = use_case(repo);

    let result = use_case
        .execute(&[violation("a")], &ReportRequest::default())
        .await;

    assert!(result.is_err());
    assert!(use_case.repository.searches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_failure_aborts_run() {
    let repo = MockBlackDuckRepository::new()
        .with_component("a", &[])
        .with_failing_search("b");
    let use_case = use_case(repo);

    let err = use_case
        .execute(
            &[violation("a"), violation("b"), violation("c")],
            &ReportRequest::default(),
        )
        .await
        .unwrap_err();

    assert!(format!("{:#}", err).contains("503 Service Unavailable"));
    let searches = use_case.repository.searches.lock().unwrap().clone();
    assert!(!searches.contains(&"c".to_string()));
}

#[tokio::test]
async fn test_concurrent_lookups_preserve_order() {
    let repo = MockBlackDuckRepository::new()
        .with_component("slow", &[])
        .with_component("fast", &[])
        .with_slow_search("slow", 50);
    let use_case = use_case(repo);
    let request = ReportRequest::builder()
        .max_concurrent_lookups(4)
        .build()
        .unwrap();

    let reports = use_case
        .execute(
            &[violation("slow"), violation("fast"), violation("unknown")],
            &request,
        )
        .await
        .unwrap();

    let names: Vec<&str> = reports.iter().map(|report| report.name.as_str()).collect();
    assert_eq!(names, vec!["slow 1.0.0", "fast 1.0.0", "unknown 1.0.0"]);
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let repo = MockBlackDuckRepository::new()
        .with_component("a", &[("MIT", "L1")])
        .with_guidance("a", &[("high", 2)])
        .with_vulnerabilities("a", vec![known_vulnerability("CVE-2024-0001", 7.5, 4.0)]);
    let use_case = use_case(repo);
    let violations = vec![violation("a"), violation("b")];

    let first = use_case
        .execute(&violations, &ReportRequest::default())
        .await
        .unwrap();
    let second = use_case
        .execute(&violations, &ReportRequest::default())
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_build_report_reports_progress() {
    let use_case = use_case(MockBlackDuckRepository::new().with_component("a", &[]));

    use_case
        .build_report(
            &BearerToken::new("bearer"),
            &[violation("a"), violation("b")],
            &ReportRequest::default(),
        )
        .await
        .unwrap();

    let messages = use_case.progress_reporter.messages.lock().unwrap().clone();
    assert!(messages.contains(&"Progress: 1/2 - a 1.0.0".to_string()));
    assert!(messages.contains(&"Progress: 2/2 - b 1.0.0".to_string()));
    assert!(messages
        .last()
        .unwrap()
        .contains("2 component(s), 1 resolved in Black Duck"));
}

#[tokio::test]
async fn test_no_enabled_policies_skips_lookups() {
    let use_case = use_case(MockBlackDuckRepository::new().with_component("a", &[("MIT", "L1")]));
    let policies = CheckPoliciesUseCase::new(
        MockBlackDuckRepository::new().with_enabled_policies(0),
    );
    let token = BearerToken::new("bearer");

    let reports = use_case
        .build_report_if_policies_enabled(
            &policies,
            &token,
            &[violation("a")],
            &ReportRequest::default(),
        )
        .await
        .unwrap();

    assert!(reports.is_empty());
    assert!(use_case.repository.searches.lock().unwrap().is_empty());
    let messages = use_case.progress_reporter.messages.lock().unwrap();
    assert!(messages
        .iter()
        .any(|message| message.contains("No enabled Black Duck policies")));
}

#[tokio::test]
async fn test_enabled_policies_build_the_full_report() {
    let use_case = use_case(MockBlackDuckRepository::new().with_component("a", &[("MIT", "L1")]));
    let policies = CheckPoliciesUseCase::new(
        MockBlackDuckRepository::new().with_enabled_policies(2),
    );
    let token = BearerToken::new("bearer");

    let reports = use_case
        .build_report_if_policies_enabled(
            &policies,
            &token,
            &[violation("a"), violation("b")],
            &ReportRequest::default(),
        )
        .await
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports[0].href.is_some());
    assert_eq!(*use_case.repository.searches.lock().unwrap(), vec!["a", "b"]);
}

#[tokio::test]
async fn test_failed_policy_check_is_reported_and_lookups_continue() {
    let use_case = use_case(MockBlackDuckRepository::new().with_component("a", &[("MIT", "L1")]));
    let policies = CheckPoliciesUseCase::new(
        MockBlackDuckRepository::new().with_failing_policy_rules(),
    );
    let token = BearerToken::new("bearer");

    let reports = use_case
        .build_report_if_policies_enabled(
            &policies,
            &token,
            &[violation("a")],
            &ReportRequest::default(),
        )
        .await
        .unwrap();

    assert_eq!(reports.len(), 1);
    assert!(reports[0].href.is_some());
    let messages = use_case.progress_reporter.messages.lock().unwrap();
    assert!(messages
        .iter()
        .any(|message| message.starts_with("Error: ") && message.contains("502 Bad Gateway")));
}
