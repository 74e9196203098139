use crate::rapid_scan::domain::{
    BearerToken, ComponentSearchResult, ComponentVersion, ComponentVulnerability, ItemArray,
    UpgradeGuidance,
};
use crate::shared::Result;
use async_trait::async_trait;

/// BlackDuckRepository port for reading from the Black Duck catalog
///
/// Resources are addressed by the links returned from earlier calls.
/// Every read takes the bearer token obtained from [`authenticate`]
/// explicitly, so one token is scoped to one report run.
///
/// `Ok(None)` means the server answered without a result (404);
/// transport and deserialization failures are `Err`.
///
/// [`authenticate`]: BlackDuckRepository::authenticate
#[async_trait]
pub trait BlackDuckRepository: Send + Sync {
    /// Exchanges the configured API token for a bearer token
    async fn authenticate(&self) -> Result<BearerToken>;

    /// Searches the component catalog, first page only
    ///
    /// # Arguments
    /// * `identifier` - Free-text component identifier used as the query
    /// * `limit` - Maximum number of hits on the page
    async fn search_components(
        &self,
        token: &BearerToken,
        identifier: &str,
        limit: usize,
    ) -> Result<Option<ItemArray<ComponentSearchResult>>>;

    /// Follows a component version link
    async fn get_component_version(
        &self,
        token: &BearerToken,
        version_link: &str,
    ) -> Result<Option<ComponentVersion>>;

    /// Fetches upgrade guidance for the component version at `component_version_href`
    async fn get_upgrade_guidance(
        &self,
        token: &BearerToken,
        component_version_href: &str,
    ) -> Result<Option<UpgradeGuidance>>;

    /// Fetches the known vulnerabilities of the component version at `component_version_href`
    async fn get_vulnerabilities(
        &self,
        token: &BearerToken,
        component_version_href: &str,
    ) -> Result<Option<ItemArray<ComponentVulnerability>>>;

    /// Fetches one page of policy rules, optionally filtered by enablement
    async fn get_policy_rules(
        &self,
        token: &BearerToken,
        limit: usize,
        enabled: Option<bool>,
    ) -> Result<Option<ItemArray<serde_json::Value>>>;
}
