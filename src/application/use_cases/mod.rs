/// Use cases module containing application business logic orchestration
mod check_policies;
mod component_resolver;
mod create_rapid_scan_report;
mod publish_comment;

pub use check_policies::CheckPoliciesUseCase;
pub use component_resolver::ComponentResolver;
pub use create_rapid_scan_report::CreateRapidScanReportUseCase;
pub use publish_comment::{PublishCommentUseCase, COMMENT_PREFACE};
