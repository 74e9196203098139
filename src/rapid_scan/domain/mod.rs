pub mod bearer_token;
pub mod component;
pub mod enrichment;
pub mod policy_violation;
pub mod report;
pub mod upgrade_guidance;
pub mod vulnerability;

pub use bearer_token::BearerToken;
pub use component::{
    ComponentLicense, ComponentSearchResult, ComponentVersion, ItemArray, ResourceMeta,
};
pub use enrichment::Enrichment;
pub use policy_violation::{PolicyViolation, ViolatingLicense, ViolatingVulnerability};
pub use report::{ComponentReport, LicenseReport, UpgradeReport, VulnerabilityReport};
pub use upgrade_guidance::{RecommendedVersion, UpgradeGuidance};
pub use vulnerability::{ComponentVulnerability, CvssView};
