use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GhvizError, Result};

pub const SCHEMA_VERSION: u32 = 1;

/// A single normalized commit: the author timestamp (never the committer's)
/// plus the repository it was fetched under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    pub timestamp: DateTime<Utc>,
    pub repo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// Restriction of the heatmap to a single repository. The day/hour/month and
/// per-repository charts always see the full record set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RepoFilter {
    #[default]
    All,
    Repo(String),
}

impl RepoFilter {
    pub fn parse(arg: Option<&str>) -> Self {
        match arg {
            None => RepoFilter::All,
            Some(s) if s.eq_ignore_ascii_case("all") => RepoFilter::All,
            Some(s) => RepoFilter::Repo(s.to_string()),
        }
    }

    pub fn matches(&self, repo: &str) -> bool {
        match self {
            RepoFilter::All => true,
            RepoFilter::Repo(name) => name == repo,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RepoFilter::All => "all",
            RepoFilter::Repo(name) => name,
        }
    }
}

/// A repository whose commit fetch failed; the rest of the run continues.
#[derive(Debug, Clone, Serialize)]
pub struct FetchFailure {
    pub repo: String,
    pub error: String,
}

/// One calendar day in the heatmap range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: u32,
}

/// Immutable result of one search: everything the aggregation pipeline and
/// the views read from. Replaced wholesale on each run, never mutated.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub user: UserProfile,
    pub repos: Vec<RepoSummary>,
    pub records: Vec<CommitRecord>,
    pub window_days: u32,
    pub failures: Vec<FetchFailure>,
    pub skipped: usize,
}

impl Snapshot {
    /// Validate a `--filter` argument against the fetched repository list.
    pub fn resolve_filter(&self, arg: Option<&str>) -> Result<RepoFilter> {
        let filter = RepoFilter::parse(arg);
        if let RepoFilter::Repo(name) = &filter {
            if !self.repos.iter().any(|r| &r.name == name) {
                return Err(GhvizError::UnknownRepository(name.clone()));
            }
        }
        Ok(filter)
    }

    pub fn filtered_records(&self, filter: &RepoFilter) -> Vec<CommitRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(&r.repo))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub user: String,
    pub window_days: u32,
    pub filter: String,
    pub max_count: u32,
    pub days: Vec<DateCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub user: String,
    pub window_days: u32,
    pub total_commits: usize,
    pub total_repos: usize,
    pub busiest_day: Option<String>,
    pub busiest_hour: Option<String>,
    pub busiest_repo: Option<String>,
    pub avg_commits_per_day: f64,
    pub skipped: usize,
    pub failures: Vec<FetchFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub user: String,
    pub window_days: u32,
    pub entries: Vec<CommitRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn snapshot_with_repos(names: &[&str]) -> Snapshot {
        Snapshot {
            user: UserProfile {
                login: "octocat".into(),
                name: None,
                bio: None,
            },
            repos: names
                .iter()
                .map(|n| RepoSummary { name: n.to_string() })
                .collect(),
            records: Vec::new(),
            window_days: 30,
            failures: Vec::new(),
            skipped: 0,
        }
    }

    #[test]
    fn filter_parse_treats_all_as_unfiltered() {
        assert_eq!(RepoFilter::parse(None), RepoFilter::All);
        assert_eq!(RepoFilter::parse(Some("all")), RepoFilter::All);
        assert_eq!(RepoFilter::parse(Some("All")), RepoFilter::All);
        assert_eq!(
            RepoFilter::parse(Some("ghviz")),
            RepoFilter::Repo("ghviz".into())
        );
    }

    #[test]
    fn resolve_filter_rejects_unknown_repo() {
        let snapshot = snapshot_with_repos(&["alpha", "beta"]);
        assert!(snapshot.resolve_filter(Some("beta")).is_ok());
        assert!(matches!(
            snapshot.resolve_filter(Some("gamma")),
            Err(GhvizError::UnknownRepository(name)) if name == "gamma"
        ));
    }

    #[test]
    fn filtered_records_keeps_only_matching_repo() {
        let mut snapshot = snapshot_with_repos(&["alpha", "beta"]);
        for (i, repo) in ["alpha", "beta", "alpha"].iter().enumerate() {
            snapshot.records.push(CommitRecord {
                timestamp: Utc.with_ymd_and_hms(2024, 3, 4, 10, i as u32, 0).unwrap(),
                repo: repo.to_string(),
            });
        }

        let all = snapshot.filtered_records(&RepoFilter::All);
        assert_eq!(all.len(), 3);

        let beta = snapshot.filtered_records(&RepoFilter::Repo("beta".into()));
        assert_eq!(beta.len(), 1);
        assert_eq!(beta[0].repo, "beta");
    }
}
