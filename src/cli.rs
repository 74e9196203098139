use clap::Parser;
use detect_rapid_report::application::dto::{OutputFormat, PullRequest, ReportRequest};
use detect_rapid_report::config::ConfigFile;
use detect_rapid_report::logging::{LogFormat, DEFAULT_LOG_LEVEL};
use detect_rapid_report::shared::error::ReportError;
use detect_rapid_report::shared::Result;
use std::path::PathBuf;

/// Turn Black Duck rapid scan policy violations into an enriched report
#[derive(Parser, Debug)]
#[command(name = "detect-rapid-report")]
#[command(version)]
#[command(
    about = "Turn Black Duck rapid scan policy violations into an enriched report",
    long_about = None
)]
pub struct Args {
    /// Rapid scan result written by Detect (*_BlackDuck_DeveloperMode_Result.json)
    #[arg(long, value_name = "FILE")]
    pub scan_results: PathBuf,

    /// Black Duck server URL
    #[arg(long, env = "BLACKDUCK_URL")]
    pub blackduck_url: Option<String>,

    /// Black Duck API token
    #[arg(long, env = "BLACKDUCK_API_TOKEN", hide_env_values = true)]
    pub blackduck_api_token: Option<String>,

    /// Output format: markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./detect-rapid-report.config.yml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when the report contains policy violations
    #[arg(long)]
    pub fail_on_violations: bool,

    /// Post the Markdown report as a comment on this pull request
    #[arg(long, value_name = "OWNER/REPO#NUMBER")]
    pub comment_on_pr: Option<PullRequest>,

    /// GitHub token used to manage the pull request comment
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub github_api_url: String,

    /// Page size of the component search (1-100)
    #[arg(long)]
    pub search_limit: Option<usize>,

    /// Component lookups run at the same time (1-16)
    #[arg(long)]
    pub max_concurrent_lookups: Option<usize>,

    /// Log filter, e.g. warn, info, debug (RUST_LOG takes precedence)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format: pretty, compact or json
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

/// Where and how to publish the report as a pull request comment
#[derive(Clone)]
pub struct CommentTarget {
    pub pull_request: PullRequest,
    pub github_token: String,
    pub github_api_url: String,
}

/// Effective settings after merging CLI, environment and config file
pub struct Settings {
    pub scan_results: PathBuf,
    pub blackduck_url: String,
    pub blackduck_api_token: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub fail_on_violations: bool,
    pub comment: Option<CommentTarget>,
    pub request: ReportRequest,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("scan_results", &self.scan_results)
            .field("blackduck_url", &self.blackduck_url)
            .field("blackduck_api_token", &"***")
            .field("format", &self.format)
            .field("output", &self.output)
            .field("fail_on_violations", &self.fail_on_violations)
            .field(
                "comment_on_pr",
                &self.comment.as_ref().map(|target| &target.pull_request),
            )
            .field("request", &self.request)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

fn missing(reason: &str, hint: &str) -> anyhow::Error {
    ReportError::InvalidConfiguration {
        reason: reason.to_string(),
        hint: hint.to_string(),
    }
    .into()
}

impl Settings {
    /// Merges `args` over `config`; values absent from both fall back to defaults
    pub fn resolve(args: Args, config: ConfigFile) -> Result<Self> {
        let blackduck_url = args
            .blackduck_url
            .or(config.blackduck_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                missing(
                    "No Black Duck URL configured",
                    "Pass --blackduck-url, set BLACKDUCK_URL, or add blackduck_url to the config file.",
                )
            })?;

        let blackduck_api_token = args
            .blackduck_api_token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                missing(
                    "No Black Duck API token configured",
                    "Pass --blackduck-api-token or set BLACKDUCK_API_TOKEN.",
                )
            })?;

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => format
                .parse::<OutputFormat>()
                .map_err(|e: String| missing(&e, "Use 'markdown' or 'json'."))?,
            (None, None) => OutputFormat::default(),
        };

        let comment = match args.comment_on_pr {
            Some(pull_request) => {
                let github_token = args
                    .github_token
                    .filter(|token| !token.trim().is_empty())
                    .ok_or_else(|| {
                        missing(
                            "--comment-on-pr requires a GitHub token",
                            "Pass --github-token or set GITHUB_TOKEN.",
                        )
                    })?;
                Some(CommentTarget {
                    pull_request,
                    github_token,
                    github_api_url: args.github_api_url,
                })
            }
            None => None,
        };

        let mut request = ReportRequest::builder();
        if let Some(search_limit) = args.search_limit.or(config.search_limit) {
            request = request.search_limit(search_limit);
        }
        if let Some(lookups) = args
            .max_concurrent_lookups
            .or(config.max_concurrent_lookups)
        {
            request = request.max_concurrent_lookups(lookups);
        }

        let log_format = match (args.log_format, config.log_format.as_deref()) {
            (Some(log_format), _) => log_format,
            (None, Some(log_format)) => log_format
                .parse::<LogFormat>()
                .map_err(|e: String| missing(&e, "Use 'pretty', 'compact' or 'json'."))?,
            (None, None) => LogFormat::default(),
        };

        Ok(Self {
            scan_results: args.scan_results,
            blackduck_url,
            blackduck_api_token,
            format,
            output: args.output,
            fail_on_violations: args.fail_on_violations
                || config.fail_on_violations.unwrap_or(false),
            comment,
            request: request.build()?,
            log_level: args
                .log_level
                .or(config.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
        })
    }
}
