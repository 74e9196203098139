use crate::ports::outbound::BlackDuckRepository;
use crate::rapid_scan::domain::BearerToken;
use crate::shared::Result;
use tracing::{debug, info, warn};

/// CheckPoliciesUseCase - asks Black Duck whether any policy rule is enabled
///
/// A rapid scan only reports violations of enabled policies, so an empty
/// rule set explains an empty report.
pub struct CheckPoliciesUseCase<R> {
    repository: R,
}

impl<R: BlackDuckRepository> CheckPoliciesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns `true` when at least one enabled policy rule exists
    ///
    /// A missing rule page is logged and treated as "no policies".
    ///
    /// # Errors
    /// Transport and deserialization failures propagate.
    pub async fn enabled_policies_exist(&self, token: &BearerToken) -> Result<bool> {
        debug!("Checking that you have at least one enabled policy...");

        let Some(page) = self.repository.get_policy_rules(token, 1, Some(true)).await? else {
            warn!("Failed to check Black Duck for policies");
            return Ok(false);
        };

        let count = page.total_count.unwrap_or(page.items.len() as u64);
        if count == 0 {
            info!("No enabled policies found in Black Duck");
            return Ok(false);
        }

        debug!(count, "enabled policies found");
        Ok(true)
    }
}
