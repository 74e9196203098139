use crate::shared::error::ReportError;
use crate::shared::Result;

/// Default page size of the component search
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Upper bound accepted for the component search page size
pub const MAX_SEARCH_LIMIT: usize = 100;

/// Upper bound accepted for concurrent component lookups
pub const MAX_CONCURRENT_LOOKUPS: usize = 16;

/// ReportRequest - tuning knobs of one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Page size of the component search; only the first hit is used
    pub search_limit: usize,
    /// Violations enriched at the same time; 1 keeps the run strictly sequential
    pub max_concurrent_lookups: usize,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            search_limit: DEFAULT_SEARCH_LIMIT,
            max_concurrent_lookups: 1,
        }
    }
}

impl ReportRequest {
    pub fn builder() -> ReportRequestBuilder {
        ReportRequestBuilder::default()
    }
}

/// Builder validating the ranges of a [`ReportRequest`]
#[derive(Debug, Default)]
pub struct ReportRequestBuilder {
    search_limit: Option<usize>,
    max_concurrent_lookups: Option<usize>,
}

impl ReportRequestBuilder {
    pub fn search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = Some(search_limit);
        self
    }

    pub fn max_concurrent_lookups(mut self, max_concurrent_lookups: usize) -> Self {
        self.max_concurrent_lookups = Some(max_concurrent_lookups);
        self
    }

    pub fn build(self) -> Result<ReportRequest> {
        let defaults = ReportRequest::default();
        let search_limit = self.search_limit.unwrap_or(defaults.search_limit);
        let max_concurrent_lookups = self
            .max_concurrent_lookups
            .unwrap_or(defaults.max_concurrent_lookups);

        if !(1..=MAX_SEARCH_LIMIT).contains(&search_limit) {
            return Err(ReportError::Validation {
                message: format!(
                    "search_limit must be between 1 and {}, got {}",
                    MAX_SEARCH_LIMIT, search_limit
                ),
            }
            .into());
        }

        if !(1..=MAX_CONCURRENT_LOOKUPS).contains(&max_concurrent_lookups) {
            return Err(ReportError::Validation {
                message: format!(
                    "max_concurrent_lookups must be between 1 and {}, got {}",
                    MAX_CONCURRENT_LOOKUPS, max_concurrent_lookups
                ),
            }
            .into());
        }

        Ok(ReportRequest {
            search_limit,
            max_concurrent_lookups,
        })
    }
}
