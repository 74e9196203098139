use crate::rapid_scan::domain::{
    ComponentVulnerability, Enrichment, ViolatingVulnerability, VulnerabilityReport,
};
use std::collections::HashSet;

/// Builds the vulnerability section of a component report
pub struct VulnerabilityReportBuilder;

impl VulnerabilityReportBuilder {
    /// Without the full vulnerability list only the violating names are known,
    /// all flagged. With it every known vulnerability is reported, flagged when
    /// its name caused the violation, and carries score, severity and link.
    pub fn build(
        violating_vulnerabilities: &[ViolatingVulnerability],
        component_vulnerabilities: Enrichment<&[ComponentVulnerability]>,
    ) -> Vec<VulnerabilityReport> {
        match component_vulnerabilities {
            Enrichment::ViolationOnly => violating_vulnerabilities
                .iter()
                .map(|vulnerability| VulnerabilityReport {
                    name: vulnerability.name.clone(),
                    violates_policy: true,
                    href: None,
                    cvss_score: None,
                    severity: None,
                })
                .collect(),
            Enrichment::FullDetail(component_vulnerabilities) => {
                let violating_names: HashSet<&str> = violating_vulnerabilities
                    .iter()
                    .map(|vulnerability| vulnerability.name.as_str())
                    .collect();

                component_vulnerabilities
                    .iter()
                    .map(|vulnerability| VulnerabilityReport {
                        name: vulnerability.name.clone(),
                        violates_policy: violating_names.contains(vulnerability.name.as_str()),
                        href: Some(vulnerability.href().to_string()),
                        cvss_score: vulnerability.base_score(),
                        severity: vulnerability.severity.clone(),
                    })
                    .collect()
            }
        }
    }
}
