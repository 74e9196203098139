use crate::application::dto::ReportRequest;
use crate::application::use_cases::{CheckPoliciesUseCase, ComponentResolver};
use crate::ports::outbound::{BlackDuckRepository, ProgressReporter};
use crate::rapid_scan::domain::{
    BearerToken, ComponentReport, ComponentVersion, ComponentVulnerability, PolicyViolation,
    UpgradeGuidance,
};
use crate::rapid_scan::services::ComponentReportBuilder;
use crate::shared::Result;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

/// CreateRapidScanReportUseCase - Core use case for report assembly
///
/// For every policy violation the component is resolved in the Black Duck
/// catalog, upgrade guidance and the vulnerability list are fetched on a
/// best-effort basis, and everything is folded into one `ComponentReport`.
///
/// # Type Parameters
/// * `R` - BlackDuckRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct CreateRapidScanReportUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> CreateRapidScanReportUseCase<R, PR>
where
    R: BlackDuckRepository,
    PR: ProgressReporter,
{
    /// Creates a new CreateRapidScanReportUseCase with injected dependencies
    pub fn new(repository: R, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    /// Authenticates once and builds the report for `violations`
    ///
    /// # Returns
    /// One report per violation, in input order
    ///
    /// # Errors
    /// Authentication, component search and component version failures
    /// abort the run. Enrichment failures never do.
    pub async fn execute(
        &self,
        violations: &[PolicyViolation],
        request: &ReportRequest,
    ) -> Result<Vec<ComponentReport>> {
        let token = self.authenticate().await?;
        self.build_report(&token, violations, request).await
    }

    /// Exchanges the API token for the bearer token of one run
    pub async fn authenticate(&self) -> Result<BearerToken> {
        self.progress_reporter
            .report("🔐 Authenticating with Black Duck...");
        self.repository.authenticate().await
    }

    /// Builds the report unless Black Duck has no enabled policy rules
    ///
    /// With no enabled rule the report is empty and nothing is looked up.
    /// A failed check is reported and enrichment goes ahead.
    pub async fn build_report_if_policies_enabled<P>(
        &self,
        policies: &CheckPoliciesUseCase<P>,
        token: &BearerToken,
        violations: &[PolicyViolation],
        request: &ReportRequest,
    ) -> Result<Vec<ComponentReport>>
    where
        P: BlackDuckRepository,
    {
        match policies.enabled_policies_exist(token).await {
            Ok(true) => {}
            Ok(false) => {
                self.progress_reporter.report(
                    "ℹ️  No enabled Black Duck policies found; skipping component lookups.",
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!("Failed to check Black Duck for policies: {:#}", e);
                self.progress_reporter.report_error(&format!(
                    "⚠️  Could not check Black Duck policies, continuing: {:#}",
                    e
                ));
            }
        }

        self.build_report(token, violations, request).await
    }

    /// Builds the report with an already obtained bearer token
    ///
    /// Violations are enriched through an ordered stream bounded by
    /// `request.max_concurrent_lookups`; the output order always matches
    /// the input order.
    pub async fn build_report(
        &self,
        token: &BearerToken,
        violations: &[PolicyViolation],
        request: &ReportRequest,
    ) -> Result<Vec<ComponentReport>> {
        let total = violations.len();
        self.progress_reporter.report(&format!(
            "🔍 Fetching Black Duck details for {} policy violation(s)...",
            total
        ));

        let resolver = ComponentResolver::new(&self.repository, request.search_limit);
        let resolver = &resolver;
        let processed = AtomicUsize::new(0);
        let processed = &processed;

        let reports: Vec<ComponentReport> = stream::iter(violations)
            .map(move |violation| async move {
                let report = self
                    .build_component_report(token, resolver, violation)
                    .await?;

                let current = processed.fetch_add(1, Ordering::Relaxed) + 1;
                self.progress_reporter
                    .report_progress(current, total, Some(report.name.as_str()));

                Ok::<_, anyhow::Error>(report)
            })
            .buffered(request.max_concurrent_lookups.max(1))
            .try_collect()
            .await?;

        let enriched = reports.iter().filter(|report| report.href.is_some()).count();
        info!(total, enriched, "rapid scan report assembled");
        self.progress_reporter.report_completion(&format!(
            "✅ Report complete: {} component(s), {} resolved in Black Duck",
            total, enriched
        ));

        Ok(reports)
    }

    /// Resolves and enriches a single violation
    async fn build_component_report(
        &self,
        token: &BearerToken,
        resolver: &ComponentResolver<'_, R>,
        violation: &PolicyViolation,
    ) -> Result<ComponentReport> {
        let identifier = violation.component_identifier.as_str();

        let Some(component_version) = resolver.resolve(token, identifier).await? else {
            debug!(identifier, "reporting violation data only");
            return Ok(ComponentReportBuilder::build(violation, None, None, None));
        };

        let upgrade_guidance = self
            .fetch_upgrade_guidance(token, identifier, &component_version)
            .await;
        let vulnerabilities = self
            .fetch_vulnerabilities(token, identifier, &component_version)
            .await;

        Ok(ComponentReportBuilder::build(
            violation,
            Some(&component_version),
            upgrade_guidance.as_ref(),
            vulnerabilities.as_deref(),
        ))
    }

    /// Best-effort: any failure is logged and degrades to `None`
    async fn fetch_upgrade_guidance(
        &self,
        token: &BearerToken,
        identifier: &str,
        component_version: &ComponentVersion,
    ) -> Option<UpgradeGuidance> {
        match self
            .repository
            .get_upgrade_guidance(token, component_version.href())
            .await
        {
            Ok(Some(guidance)) => Some(guidance),
            Ok(None) => {
                warn!(
                    "Could not get upgrade guidance for {}: The upgrade guidance result was empty",
                    identifier
                );
                None
            }
            Err(e) => {
                warn!("Could not get upgrade guidance for {}: {:#}", identifier, e);
                None
            }
        }
    }

    /// Best-effort: any failure is logged and degrades to `None`
    async fn fetch_vulnerabilities(
        &self,
        token: &BearerToken,
        identifier: &str,
        component_version: &ComponentVersion,
    ) -> Option<Vec<ComponentVulnerability>> {
        match self
            .repository
            .get_vulnerabilities(token, component_version.href())
            .await
        {
            Ok(Some(page)) => Some(page.items),
            Ok(None) => {
                warn!(
                    "Could not get vulnerabilities for {}: The vulnerability result was empty",
                    identifier
                );
                None
            }
            Err(e) => {
                warn!("Could not get vulnerabilities for {}: {:#}", identifier, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests;
