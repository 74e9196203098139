mod cli;

use clap::Parser;
use cli::{Args, CommentTarget, Settings};
use detect_rapid_report::adapters::outbound::console::StderrProgressReporter;
use detect_rapid_report::adapters::outbound::filesystem::FileSystemReader;
use detect_rapid_report::adapters::outbound::network::{
    BlackDuckClient, CachingBlackDuckRepository, GitHubCommentClient,
};
use detect_rapid_report::application::dto::{OutputFormat, RapidScanReport};
use detect_rapid_report::application::factories::{FormatterFactory, PresenterFactory};
use detect_rapid_report::application::use_cases::{
    CheckPoliciesUseCase, CreateRapidScanReportUseCase, PublishCommentUseCase,
};
use detect_rapid_report::config;
use detect_rapid_report::logging;
use detect_rapid_report::ports::outbound::PolicyViolationReader;
use detect_rapid_report::shared::error::ExitCode;
use detect_rapid_report::shared::Result;
use owo_colors::OwoColorize;
use std::process;
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\n{} {}", "Caused by:".yellow(), cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };
    let settings = Settings::resolve(args, config)?;

    logging::init_tracing(&settings.log_level, settings.log_format)?;
    debug!(?settings, "resolved settings");

    let violations = FileSystemReader::new().read_violations(&settings.scan_results)?;
    eprintln!(
        "📂 Loaded {} policy violation(s) from {}",
        violations.len(),
        settings.scan_results.display()
    );

    // Create adapters (Dependency Injection)
    let repository = CachingBlackDuckRepository::new(BlackDuckClient::new(
        &settings.blackduck_url,
        settings.blackduck_api_token.as_str(),
    )?);
    let report_use_case =
        CreateRapidScanReportUseCase::new(repository.clone(), StderrProgressReporter::new());
    let policy_use_case = CheckPoliciesUseCase::new(repository);

    let token = report_use_case.authenticate().await?;
    let components = report_use_case
        .build_report_if_policies_enabled(
            &policy_use_case,
            &token,
            &violations,
            &settings.request,
        )
        .await?;
    let report = RapidScanReport::new(components);

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;
    PresenterFactory::create(settings.output.clone().into()).present(&formatted_output)?;

    if let Some(target) = &settings.comment {
        let markdown = match settings.format {
            OutputFormat::Markdown => formatted_output,
            OutputFormat::Json => FormatterFactory::create(OutputFormat::Markdown).format(&report)?,
        };
        publish_comment(target, &markdown).await?;
    }

    if settings.fail_on_violations && report.has_violations() {
        eprintln!(
            "{}",
            format!(
                "🚫 {} component(s) violate policy",
                report.components.len()
            )
            .red()
        );
        return Ok(ExitCode::PolicyViolationsFound);
    }

    Ok(ExitCode::Success)
}

async fn publish_comment(target: &CommentTarget, markdown: &str) -> Result<()> {
    let client = GitHubCommentClient::new(&target.github_api_url, target.github_token.as_str())?;
    PublishCommentUseCase::new(client)
        .publish(&target.pull_request, markdown)
        .await?;
    eprintln!("💬 Report posted to {}", target.pull_request);
    Ok(())
}
