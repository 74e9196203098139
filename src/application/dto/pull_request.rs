use crate::shared::error::ReportError;

/// Target pull request for the managed comment, written `owner/repo#number`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl std::str::FromStr for PullRequest {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReportError::Validation {
            message: format!(
                "Invalid pull request reference '{}'. Expected 'owner/repo#number'",
                s
            ),
        };

        let (slug, number) = s.rsplit_once('#').ok_or_else(invalid)?;
        let (owner, repo) = slug.split_once('/').ok_or_else(invalid)?;
        let number: u64 = number.parse().map_err(|_| invalid())?;

        if owner.is_empty() || repo.is_empty() || repo.contains('/') || number == 0 {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
        })
    }
}

impl std::fmt::Display for PullRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}
