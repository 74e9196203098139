use crate::application::dto::PullRequest;
use crate::ports::outbound::{CommentRepository, IssueComment};
use crate::shared::Result;
use anyhow::Context;
use tracing::{debug, warn};

/// First line of every comment this tool manages
pub const COMMENT_PREFACE: &str =
    "<!-- Comment automatically managed by Detect Action, do not remove this line -->";

/// PublishCommentUseCase - keeps exactly one managed report comment on a pull request
///
/// Earlier managed comments are removed before the new one is created.
pub struct PublishCommentUseCase<C> {
    repository: C,
}

impl<C: CommentRepository> PublishCommentUseCase<C> {
    pub fn new(repository: C) -> Self {
        Self { repository }
    }

    /// Replaces any managed comment on `pull_request` with `report`
    ///
    /// # Errors
    /// Listing and creating comments propagate failures. A failed delete
    /// is logged and does not stop the new comment from being posted.
    pub async fn publish(&self, pull_request: &PullRequest, report: &str) -> Result<()> {
        debug!("Gathering existing comments...");
        let existing = self
            .repository
            .list_comments(pull_request)
            .await
            .with_context(|| format!("Failed to list comments on {}", pull_request))?;

        for comment in existing.iter().filter(|comment| is_managed_comment(comment)) {
            debug!(
                comment_id = comment.id,
                "Existing managed comment found. Attempting to delete it..."
            );
            if let Err(e) = self
                .repository
                .delete_comment(pull_request, comment.id)
                .await
            {
                warn!("Could not delete comment {}: {:#}", comment.id, e);
            }
        }

        debug!("Creating a new comment...");
        self.repository
            .create_comment(pull_request, &managed_body(report))
            .await
            .with_context(|| format!("Failed to comment on {}", pull_request))?;
        debug!("Successfully created a new comment!");

        Ok(())
    }
}

fn managed_body(report: &str) -> String {
    format!("{}\r\n{}", COMMENT_PREFACE, report)
}

/// A comment is managed when its first `\r\n`-delimited line is the preface
pub fn is_managed_comment(comment: &IssueComment) -> bool {
    comment
        .body
        .as_deref()
        .and_then(|body| body.split("\r\n").next())
        .is_some_and(|first_line| first_line == COMMENT_PREFACE)
}
