use async_trait::async_trait;
use detect_rapid_report::prelude::*;
use detect_rapid_report::ports::outbound::IssueComment;
use std::sync::{Arc, Mutex};

/// In-memory pull request conversation
#[derive(Clone, Default)]
pub struct MockCommentRepository {
    comments: Arc<Mutex<Vec<IssueComment>>>,
    next_id: Arc<Mutex<u64>>,
}

impl MockCommentRepository {
    pub fn new() -> Self {
        Self {
            comments: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    pub fn with_comment(self, body: &str) -> Self {
        self.push(body);
        self
    }

    pub fn bodies(&self) -> Vec<String> {
        self.comments
            .lock()
            .unwrap()
            .iter()
            .filter_map(|comment| comment.body.clone())
            .collect()
    }

    fn push(&self, body: &str) {
        let mut next_id = self.next_id.lock().unwrap();
        self.comments.lock().unwrap().push(IssueComment {
            id: *next_id,
            body: Some(body.to_string()),
        });
        *next_id += 1;
    }
}

#[async_trait]
impl CommentRepository for MockCommentRepository {
    async fn list_comments(&self, _pull_request: &PullRequest) -> Result<Vec<IssueComment>> {
        Ok(self.comments.lock().unwrap().clone())
    }

    async fn delete_comment(&self, _pull_request: &PullRequest, comment_id: u64) -> Result<()> {
        self.comments
            .lock()
            .unwrap()
            .retain(|comment| comment.id != comment_id);
        Ok(())
    }

    async fn create_comment(&self, _pull_request: &PullRequest, body: &str) -> Result<()> {
        self.push(body);
        Ok(())
    }
}
