//! detect-rapid-report - policy violation reports for Black Duck rapid scans
//!
//! This library turns the policy violations written by a Detect rapid scan
//! into an enriched, human-readable report: each violating component is
//! resolved in the Black Duck catalog, decorated with licenses, known
//! vulnerabilities and upgrade guidance, and rendered as Markdown or JSON.
//! The Markdown report can be kept as a single managed pull request comment.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`rapid_scan`): Wire models and the pure report builders
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use detect_rapid_report::prelude::*;
//! use std::path::Path;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let violations = FileSystemReader::new()
//!     .read_violations(Path::new("runs/scan/result.json"))?;
//! let repository = CachingBlackDuckRepository::new(
//!     BlackDuckClient::new("https://blackduck.example.com", "api-token")?,
//! );
//!
//! // Create use case and execute
//! let use_case = CreateRapidScanReportUseCase::new(repository, StderrProgressReporter::new());
//! let components = use_case
//!     .execute(&violations, &ReportRequest::default())
//!     .await?;
//!
//! // Format output
//! let output = MarkdownFormatter::new().format(&RapidScanReport::new(components))?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod logging;
pub mod ports;
pub mod rapid_scan;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        BlackDuckClient, CachingBlackDuckRepository, GitHubCommentClient,
    };
    pub use crate::application::dto::{
        OutputFormat, PullRequest, RapidScanReport, ReportRequest,
    };
    pub use crate::application::use_cases::{
        CheckPoliciesUseCase, CreateRapidScanReportUseCase, PublishCommentUseCase,
    };
    pub use crate::ports::outbound::{
        BlackDuckRepository, CommentRepository, OutputPresenter, PolicyViolationReader,
        ProgressReporter, ReportFormatter,
    };
    pub use crate::rapid_scan::domain::{
        BearerToken, ComponentReport, Enrichment, PolicyViolation,
    };
    pub use crate::rapid_scan::services::ComponentReportBuilder;
    pub use crate::shared::Result;
}
