use crate::application::dto::PullRequest;
use crate::ports::outbound::{CommentRepository, IssueComment};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct CreateCommentRequest<'a> {
    body: &'a str,
}

/// GitHubCommentClient adapter for pull request conversation comments
///
/// Implements the CommentRepository port against the GitHub REST API.
#[derive(Clone)]
pub struct GitHubCommentClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl GitHubCommentClient {
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";
    const TIMEOUT_SECONDS: u64 = 30;
    const MEDIA_TYPE: &'static str = "application/vnd.github+json";
    /// Largest page GitHub serves for issue comments
    const PAGE_SIZE: usize = 100;

    pub fn new(api_url: &str, token: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("detect-rapid-report/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn comments_url(&self, pull_request: &PullRequest) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url,
            urlencoding::encode(&pull_request.owner),
            urlencoding::encode(&pull_request.repo),
            pull_request.number
        )
    }

    fn comment_url(&self, pull_request: &PullRequest, comment_id: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/comments/{}",
            self.api_url,
            urlencoding::encode(&pull_request.owner),
            urlencoding::encode(&pull_request.repo),
            comment_id
        )
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header(ACCEPT, Self::MEDIA_TYPE)
    }
}

#[async_trait]
impl CommentRepository for GitHubCommentClient {
    async fn list_comments(&self, pull_request: &PullRequest) -> Result<Vec<IssueComment>> {
        let base_url = self.comments_url(pull_request);
        let mut comments = Vec::new();

        for page in 1.. {
            let url = format!("{}?per_page={}&page={}", base_url, Self::PAGE_SIZE, page);
            let response = self.request(reqwest::Method::GET, &url).send().await?;
            if !response.status().is_success() {
                anyhow::bail!("GitHub API returned status code {}", response.status());
            }

            let batch: Vec<IssueComment> = response
                .json()
                .await
                .context("Failed to parse GitHub comment list")?;
            let last_page = batch.len() < Self::PAGE_SIZE;
            comments.extend(batch);
            if last_page {
                break;
            }
        }

        Ok(comments)
    }

    async fn delete_comment(&self, pull_request: &PullRequest, comment_id: u64) -> Result<()> {
        let url = self.comment_url(pull_request, comment_id);
        let response = self.request(reqwest::Method::DELETE, &url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("GitHub API returned status code {}", response.status());
        }
        Ok(())
    }

    async fn create_comment(&self, pull_request: &PullRequest, body: &str) -> Result<()> {
        let url = self.comments_url(pull_request);
        let response = self
            .request(reqwest::Method::POST, &url)
            .json(&CreateCommentRequest { body })
            .send()
            .await?;
        if !response.status().is_success() {
            anyhow::bail!("GitHub API returned status code {}", response.status());
        }
        Ok(())
    }
}
