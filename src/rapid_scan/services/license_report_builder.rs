use crate::rapid_scan::domain::{ComponentVersion, Enrichment, LicenseReport, ViolatingLicense};
use std::collections::HashSet;

/// Builds the license section of a component report
pub struct LicenseReportBuilder;

impl LicenseReportBuilder {
    /// Without catalog detail every violating license is reported as violating.
    /// With detail the component's full license list is authoritative and a
    /// license is flagged when its name caused the violation.
    pub fn build(
        violating_licenses: &[ViolatingLicense],
        component_version: Enrichment<&ComponentVersion>,
    ) -> Vec<LicenseReport> {
        match component_version {
            Enrichment::ViolationOnly => violating_licenses
                .iter()
                .map(|license| LicenseReport {
                    name: license.license_name.clone(),
                    href: license.href().to_string(),
                    violates_policy: true,
                })
                .collect(),
            Enrichment::FullDetail(component_version) => {
                let violating_names: HashSet<&str> = violating_licenses
                    .iter()
                    .map(|license| license.license_name.as_str())
                    .collect();

                component_version
                    .licenses()
                    .iter()
                    .map(|license| LicenseReport {
                        name: license.name.clone(),
                        href: license.license.clone(),
                        violates_policy: violating_names.contains(license.name.as_str()),
                    })
                    .collect()
            }
        }
    }
}
