use crate::ports::outbound::BlackDuckRepository;
use crate::rapid_scan::domain::{
    BearerToken, ComponentSearchResult, ComponentVersion, ComponentVulnerability, ItemArray,
    UpgradeGuidance,
};
use crate::shared::error::ReportError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

const VULNERABILITY_MEDIA_TYPE: &str = "application/vnd.blackducksoftware.vulnerability-4+json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthenticationResponse {
    bearer_token: String,
}

/// BlackDuckClient adapter for the Black Duck REST API
///
/// Implements the BlackDuckRepository port over async reqwest. The API
/// token is exchanged once for a bearer token; every later read carries
/// that bearer token.
#[derive(Clone)]
pub struct BlackDuckClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl BlackDuckClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for the server at `blackduck_url`
    ///
    /// A trailing slash on the URL is dropped.
    pub fn new(blackduck_url: &str, api_token: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("detect-rapid-report/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: clean_url(blackduck_url).to_string(),
            api_token: api_token.into(),
        })
    }

    /// GETs `url` and deserializes the body
    ///
    /// 404 maps to `Ok(None)`; any other non-success status is an error.
    async fn get_json<T: DeserializeOwned>(
        &self,
        token: &BearerToken,
        url: &str,
        accept: Option<&str>,
    ) -> Result<Option<T>> {
        let mut request = self.client.get(url).bearer_auth(token.as_str());
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(url, "resource not found");
            return Ok(None);
        }
        if !status.is_success() {
            anyhow::bail!("Black Duck returned status code {} for {}", status, url);
        }

        let body = response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse Black Duck response from {}", url))?;
        Ok(Some(body))
    }

    fn authentication_failed(&self, details: impl ToString) -> anyhow::Error {
        ReportError::AuthenticationFailed {
            url: self.base_url.clone(),
            details: details.to_string(),
        }
        .into()
    }
}

#[async_trait]
impl BlackDuckRepository for BlackDuckClient {
    async fn authenticate(&self) -> Result<BearerToken> {
        info!("Initiating authentication request to Black Duck...");
        let url = format!("{}/api/tokens/authenticate", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("token {}", self.api_token))
            .send()
            .await
            .map_err(|e| self.authentication_failed(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.authentication_failed(format!("status code {}", status)));
        }

        let body: AuthenticationResponse = response
            .json()
            .await
            .map_err(|e| self.authentication_failed(e))?;

        info!("Successfully authenticated with Black Duck");
        Ok(BearerToken::new(body.bearer_token))
    }

    async fn search_components(
        &self,
        token: &BearerToken,
        identifier: &str,
        limit: usize,
    ) -> Result<Option<ItemArray<ComponentSearchResult>>> {
        let url = components_url(&self.base_url, identifier, limit);
        self.get_json(token, &url, None).await
    }

    async fn get_component_version(
        &self,
        token: &BearerToken,
        version_link: &str,
    ) -> Result<Option<ComponentVersion>> {
        self.get_json(token, version_link, None).await
    }

    async fn get_upgrade_guidance(
        &self,
        token: &BearerToken,
        component_version_href: &str,
    ) -> Result<Option<UpgradeGuidance>> {
        let url = format!("{}/upgrade-guidance", component_version_href);
        self.get_json(token, &url, None).await
    }

    async fn get_vulnerabilities(
        &self,
        token: &BearerToken,
        component_version_href: &str,
    ) -> Result<Option<ItemArray<ComponentVulnerability>>> {
        let url = format!("{}/vulnerabilities", component_version_href);
        self.get_json(token, &url, Some(VULNERABILITY_MEDIA_TYPE))
            .await
    }

    async fn get_policy_rules(
        &self,
        token: &BearerToken,
        limit: usize,
        enabled: Option<bool>,
    ) -> Result<Option<ItemArray<serde_json::Value>>> {
        debug!("Requesting policies from Black Duck...");
        let url = policy_rules_url(&self.base_url, limit, enabled);
        self.get_json(token, &url, None).await
    }
}

/// Drops one trailing slash from a server URL
pub fn clean_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

fn components_url(base_url: &str, identifier: &str, limit: usize) -> String {
    format!(
        "{}/api/components?q={}&offset=0&limit={}",
        base_url,
        urlencoding::encode(identifier),
        limit
    )
}

fn policy_rules_url(base_url: &str, limit: usize, enabled: Option<bool>) -> String {
    match enabled {
        Some(enabled) => format!(
            "{}/api/policy-rules?filter=policyRuleEnabled%3A{}&offset=0&limit={}",
            base_url, enabled, limit
        ),
        None => format!("{}/api/policy-rules?offset=0&limit={}", base_url, limit),
    }
}
