use super::{LicenseReportBuilder, UpgradeReportBuilder, VulnerabilityReportBuilder};
use crate::rapid_scan::domain::{
    ComponentReport, ComponentVersion, ComponentVulnerability, Enrichment, PolicyViolation,
    UpgradeGuidance,
};

/// Folds a violation and whatever catalog detail was obtained for it
/// into one report entry.
///
/// Violated policies and every `violates_policy` flag come from the
/// violation; the catalog only contributes links, scores and severities.
pub struct ComponentReportBuilder;

impl ComponentReportBuilder {
    pub fn build(
        violation: &PolicyViolation,
        component_version: Option<&ComponentVersion>,
        upgrade_guidance: Option<&UpgradeGuidance>,
        vulnerabilities: Option<&[ComponentVulnerability]>,
    ) -> ComponentReport {
        ComponentReport {
            violated_policies: violation.violating_policy_names.clone(),
            name: violation.display_name(),
            href: component_version.map(|version| version.href().to_string()),
            licenses: LicenseReportBuilder::build(
                &violation.policy_violation_licenses,
                Enrichment::from(component_version),
            ),
            vulnerabilities: VulnerabilityReportBuilder::build(
                &violation.policy_violation_vulnerabilities,
                Enrichment::from(vulnerabilities),
            ),
            short_term_upgrade: UpgradeReportBuilder::build(
                upgrade_guidance.and_then(|guidance| guidance.short_term.as_ref()),
            ),
            long_term_upgrade: UpgradeReportBuilder::build(
                upgrade_guidance.and_then(|guidance| guidance.long_term.as_ref()),
            ),
        }
    }
}
