mod component_report_builder;
mod license_report_builder;
mod upgrade_report_builder;
mod vulnerability_report_builder;

pub use component_report_builder::ComponentReportBuilder;
pub use license_report_builder::LicenseReportBuilder;
pub use upgrade_report_builder::UpgradeReportBuilder;
pub use vulnerability_report_builder::VulnerabilityReportBuilder;
