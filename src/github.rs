//! GitHub REST API client and the data-acquisition orchestrator: profile,
//! repository list, then one commit page per repository, strictly in
//! sequence. Per-repository failures are collected, not fatal.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;

use crate::error::{GhvizError, Result};
use crate::model::{CommitRecord, FetchFailure, RepoSummary, Snapshot, UserProfile};

const API_ROOT: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;

#[derive(Debug, Deserialize)]
struct RawRepo {
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct RawCommit {
    pub sha: String,
    commit: RawCommitBody,
}

#[derive(Debug, Deserialize)]
struct RawCommitBody {
    author: Option<RawSignature>,
}

#[derive(Debug, Deserialize)]
struct RawSignature {
    date: Option<String>,
}

pub struct GitHubClient {
    agent: ureq::Agent,
    token: Option<String>,
}

impl GitHubClient {
    /// Build a client; `token` falls back to the `GITHUB_TOKEN` environment
    /// variable and is sent as a bearer header when present.
    pub fn new(token: Option<String>) -> Self {
        let token = token.or_else(|| std::env::var("GITHUB_TOKEN").ok());
        Self {
            agent: ureq::AgentBuilder::new().build(),
            token,
        }
    }

    fn get(&self, url: &str) -> Result<ureq::Response> {
        let mut request = self
            .agent
            .get(url)
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", "ghviz");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }
        match request.call() {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(status, response)) => Err(GhvizError::Api {
                status,
                url: response.get_url().to_string(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    pub fn fetch_user(&self, user: &str) -> Result<UserProfile> {
        let url = format!("{API_ROOT}/users/{user}");
        match self.get(&url) {
            Ok(response) => Ok(response.into_json()?),
            Err(GhvizError::Api { status: 404, .. }) => {
                Err(GhvizError::UserNotFound(user.to_string()))
            }
            Err(err) => Err(err),
        }
    }

    /// Up to one page of the user's most recently updated repositories.
    pub fn fetch_repos(&self, user: &str) -> Result<Vec<RepoSummary>> {
        let url = format!("{API_ROOT}/users/{user}/repos?sort=updated&per_page={PER_PAGE}");
        let raw: Vec<RawRepo> = self.get(&url)?.into_json()?;
        Ok(raw
            .into_iter()
            .map(|r| RepoSummary { name: r.name })
            .collect())
    }

    /// Up to one page of commits authored since the cutoff. An empty
    /// repository answers 409 and contributes zero commits.
    pub fn fetch_commits_since(
        &self,
        user: &str,
        repo: &str,
        since: &DateTime<Utc>,
    ) -> Result<Vec<RawCommit>> {
        let since = since.to_rfc3339_opts(SecondsFormat::Secs, true);
        let url =
            format!("{API_ROOT}/repos/{user}/{repo}/commits?since={since}&per_page={PER_PAGE}");
        match self.get(&url) {
            Ok(response) => Ok(response.into_json()?),
            Err(GhvizError::Api { status: 409, .. }) => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }
}

/// Shape a raw commit into a `CommitRecord`. The author timestamp is
/// required; a missing or unparseable one is surfaced to the caller.
pub fn normalize(raw: &RawCommit, repo: &str) -> Result<CommitRecord> {
    let date = raw
        .commit
        .author
        .as_ref()
        .and_then(|a| a.date.as_deref())
        .ok_or_else(|| GhvizError::InvalidDate(format!("commit {} has no author date", raw.sha)))?;

    let timestamp = DateTime::parse_from_rfc3339(date)
        .map_err(|e| GhvizError::InvalidDate(format!("commit {}: {e}", raw.sha)))?
        .with_timezone(&Utc);

    Ok(CommitRecord {
        timestamp,
        repo: repo.to_string(),
    })
}

/// Run the full acquisition sequence and assemble the immutable snapshot the
/// aggregation pipeline consumes. Profile and repository-list failures are
/// fatal; a single repository's commit fetch failing is recorded and skipped.
pub fn fetch_snapshot(client: &GitHubClient, user: &str, window_days: u32) -> Result<Snapshot> {
    let profile = client.fetch_user(user)?;
    let repos = client.fetch_repos(user)?;
    let since = Utc::now() - Duration::days(window_days as i64);

    let mut records = Vec::new();
    let mut failures = Vec::new();
    let mut skipped = 0usize;

    let pb = ProgressBar::new(repos.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for repo in &repos {
        pb.set_message(repo.name.clone());
        match client.fetch_commits_since(user, &repo.name, &since) {
            Ok(commits) => {
                for raw in &commits {
                    match normalize(raw, &repo.name) {
                        Ok(record) => records.push(record),
                        Err(_) => skipped += 1,
                    }
                }
            }
            Err(err) => failures.push(FetchFailure {
                repo: repo.name.clone(),
                error: err.to_string(),
            }),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(Snapshot {
        user: profile,
        repos,
        records,
        window_days,
        failures,
        skipped,
    })
}

/// Print partial-failure details to stderr so they never pollute piped
/// JSON/NDJSON output.
pub fn report_fetch_issues(snapshot: &Snapshot) {
    for failure in &snapshot.failures {
        eprintln!(
            "{} {}: {}",
            style("warning: skipped repository").yellow(),
            failure.repo,
            failure.error
        );
    }
    if snapshot.skipped > 0 {
        eprintln!(
            "{} {} commit(s) without a parseable author timestamp",
            style("warning: skipped").yellow(),
            snapshot.skipped
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_uses_the_author_timestamp() {
        let raw: RawCommit = serde_json::from_str(
            r#"{
                "sha": "abc123",
                "commit": {
                    "author": { "name": "Octo Cat", "date": "2024-03-04T10:00:00Z" },
                    "committer": { "name": "web-flow", "date": "2024-03-05T08:00:00Z" }
                }
            }"#,
        )
        .unwrap();

        let record = normalize(&raw, "alpha").unwrap();
        assert_eq!(record.repo, "alpha");
        assert_eq!(
            record.timestamp,
            Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn normalize_converts_offsets_to_utc() {
        let raw: RawCommit = serde_json::from_str(
            r#"{"sha": "def456", "commit": {"author": {"date": "2024-03-04T12:00:00+02:00"}}}"#,
        )
        .unwrap();

        let record = normalize(&raw, "alpha").unwrap();
        assert_eq!(
            record.timestamp,
            Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn normalize_surfaces_a_missing_author_date() {
        let raw: RawCommit =
            serde_json::from_str(r#"{"sha": "ghi789", "commit": {"author": null}}"#).unwrap();
        assert!(matches!(
            normalize(&raw, "alpha"),
            Err(GhvizError::InvalidDate(_))
        ));
    }

    #[test]
    fn normalize_surfaces_an_unparseable_author_date() {
        let raw: RawCommit = serde_json::from_str(
            r#"{"sha": "jkl012", "commit": {"author": {"date": "yesterday"}}}"#,
        )
        .unwrap();
        assert!(matches!(
            normalize(&raw, "alpha"),
            Err(GhvizError::InvalidDate(_))
        ));
    }
}
