use crate::ports::outbound::BlackDuckRepository;
use crate::rapid_scan::domain::{
    BearerToken, ComponentSearchResult, ComponentVersion, ComponentVulnerability, ItemArray,
    UpgradeGuidance,
};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for a component search page
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct SearchKey {
    identifier: String,
    limit: usize,
}

impl SearchKey {
    fn new(identifier: &str, limit: usize) -> Self {
        Self {
            identifier: identifier.to_string(),
            limit,
        }
    }
}

/// CachingBlackDuckRepository wraps a BlackDuckRepository and memoizes catalog lookups.
///
/// Rapid scan results often list the same component under several policy
/// violations; the search page and the component version record are
/// fetched once per run. Successful answers are cached, including "not
/// found"; errors are not. Upgrade guidance, vulnerabilities and policy
/// rules pass straight through.
#[derive(Clone)]
pub struct CachingBlackDuckRepository<R: BlackDuckRepository> {
    inner: R,
    searches: Arc<DashMap<SearchKey, Option<ItemArray<ComponentSearchResult>>>>,
    versions: Arc<DashMap<String, Option<ComponentVersion>>>,
}

impl<R: BlackDuckRepository> CachingBlackDuckRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            searches: Arc::new(DashMap::new()),
            versions: Arc::new(DashMap::new()),
        }
    }

    #[cfg(test)]
    fn cache_size(&self) -> usize {
        self.searches.len() + self.versions.len()
    }
}

#[async_trait]
impl<R: BlackDuckRepository> BlackDuckRepository for CachingBlackDuckRepository<R> {
    async fn authenticate(&self) -> Result<BearerToken> {
        self.inner.authenticate().await
    }

    async fn search_components(
        &self,
        token: &BearerToken,
        identifier: &str,
        limit: usize,
    ) -> Result<Option<ItemArray<ComponentSearchResult>>> {
        let key = SearchKey::new(identifier, limit);
        if let Some(cached) = self.searches.get(&key) {
            return Ok(cached.clone());
        }

        let page = self
            .inner
            .search_components(token, identifier, limit)
            .await?;
        self.searches.insert(key, page.clone());

        Ok(page)
    }

    async fn get_component_version(
        &self,
        token: &BearerToken,
        version_link: &str,
    ) -> Result<Option<ComponentVersion>> {
        if let Some(cached) = self.versions.get(version_link) {
            return Ok(cached.clone());
        }

        let version = self
            .inner
            .get_component_version(token, version_link)
            .await?;
        self.versions
            .insert(version_link.to_string(), version.clone());

        Ok(version)
    }

    async fn get_upgrade_guidance(
        &self,
        token: &BearerToken,
        component_version_href: &str,
    ) -> Result<Option<UpgradeGuidance>> {
        self.inner
            .get_upgrade_guidance(token, component_version_href)
            .await
    }

    async fn get_vulnerabilities(
        &self,
        token: &BearerToken,
        component_version_href: &str,
    ) -> Result<Option<ItemArray<ComponentVulnerability>>> {
        self.inner
            .get_vulnerabilities(token, component_version_href)
            .await
    }

    async fn get_policy_rules(
        &self,
        token: &BearerToken,
        limit: usize,
        enabled: Option<bool>,
    ) -> Result<Option<ItemArray<serde_json::Value>>> {
        self.inner.get_policy_rules(token, limit, enabled).await
    }
}
