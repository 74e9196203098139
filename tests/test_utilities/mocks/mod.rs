/// Mock implementations for testing
mod mock_blackduck_repository;
mod mock_comment_repository;
mod mock_progress_reporter;

pub use mock_blackduck_repository::MockBlackDuckRepository;
pub use mock_comment_repository::MockCommentRepository;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
