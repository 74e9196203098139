use crate::ports::outbound::BlackDuckRepository;
use crate::rapid_scan::domain::{BearerToken, ComponentVersion};
use crate::shared::Result;
use anyhow::Context;
use tracing::debug;

/// ComponentResolver - maps a free-text component identifier to a catalog record
///
/// The first search hit wins; there is no ranking between hits.
pub struct ComponentResolver<'a, R: BlackDuckRepository> {
    repository: &'a R,
    search_limit: usize,
}

impl<'a, R: BlackDuckRepository> ComponentResolver<'a, R> {
    pub fn new(repository: &'a R, search_limit: usize) -> Self {
        Self {
            repository,
            search_limit,
        }
    }

    /// Resolves `identifier` to its component version record
    ///
    /// # Returns
    /// `Ok(None)` when the search has no hit, the first hit carries no
    /// version link, or the link does not resolve.
    ///
    /// # Errors
    /// Transport and deserialization failures propagate.
    pub async fn resolve(
        &self,
        token: &BearerToken,
        identifier: &str,
    ) -> Result<Option<ComponentVersion>> {
        let search_page = self
            .repository
            .search_components(token, identifier, self.search_limit)
            .await
            .with_context(|| format!("Failed to search Black Duck for component {}", identifier))?;

        let Some(version_link) = search_page
            .and_then(|page| page.items.into_iter().next())
            .and_then(|first_hit| first_hit.version)
        else {
            debug!(identifier, "no component version matched");
            return Ok(None);
        };

        let component_version = self
            .repository
            .get_component_version(token, &version_link)
            .await
            .with_context(|| {
                format!(
                    "Failed to fetch component version {} for {}",
                    version_link, identifier
                )
            })?;

        if component_version.is_none() {
            debug!(identifier, version_link = %version_link, "component version link did not resolve");
        }

        Ok(component_version)
    }
}
