/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (Black Duck, GitHub, file system, console).
pub mod blackduck_repository;
pub mod comment_repository;
pub mod output_presenter;
pub mod policy_violation_reader;
pub mod progress_reporter;
pub mod report_formatter;

pub use blackduck_repository::BlackDuckRepository;
pub use comment_repository::{CommentRepository, IssueComment};
pub use output_presenter::OutputPresenter;
pub use policy_violation_reader::PolicyViolationReader;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
