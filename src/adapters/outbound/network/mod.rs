/// Network adapters for external API calls
mod blackduck_client;
mod caching_blackduck_repository;
mod github_comment_client;

pub use blackduck_client::{clean_url, BlackDuckClient};
pub use caching_blackduck_repository::CachingBlackDuckRepository;
pub use github_comment_client::GitHubCommentClient;
