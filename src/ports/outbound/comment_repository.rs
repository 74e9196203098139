use crate::application::dto::PullRequest;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// A comment on a pull request conversation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueComment {
    pub id: u64,
    #[serde(default)]
    pub body: Option<String>,
}

/// CommentRepository port for the source-control comment thread
///
/// Implementations perform the raw operations; deciding which comment
/// is ours belongs to the application layer.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn list_comments(&self, pull_request: &PullRequest) -> Result<Vec<IssueComment>>;

    async fn delete_comment(&self, pull_request: &PullRequest, comment_id: u64) -> Result<()>;

    async fn create_comment(&self, pull_request: &PullRequest, body: &str) -> Result<()>;
}
