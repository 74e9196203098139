/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod pull_request;
mod rapid_scan_report;
mod report_request;

pub use output_format::OutputFormat;
pub use pull_request::PullRequest;
pub use rapid_scan_report::{RapidScanReport, ReportMetadata};
pub use report_request::{
    ReportRequest, DEFAULT_SEARCH_LIMIT, MAX_CONCURRENT_LOOKUPS, MAX_SEARCH_LIMIT,
};
