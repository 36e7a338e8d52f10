use anyhow::Context;
use chrono::Utc;
use console::style;
use std::collections::HashSet;

use crate::cli::CommonArgs;
use crate::github::{fetch_snapshot, report_fetch_issues, GitHubClient};
use crate::model::{CommitRecord, ExportOutput, Snapshot, SCHEMA_VERSION};

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let client = GitHubClient::new(common.token.clone());
    let snapshot = fetch_snapshot(&client, &common.user, common.days)
        .context("Failed to fetch commit activity")?;
    report_fetch_issues(&snapshot);

    let mut entries = snapshot.records.clone();
    entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    if json {
        output_json(&entries, &snapshot)?;
    } else if ndjson {
        output_ndjson(&entries)?;
    } else {
        output_summary(&entries);
    }

    Ok(())
}

fn output_json(entries: &[CommitRecord], snapshot: &Snapshot) -> anyhow::Result<()> {
    let output = ExportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        user: snapshot.user.login.clone(),
        window_days: snapshot.window_days,
        entries: entries.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(entries: &[CommitRecord]) -> anyhow::Result<()> {
    for entry in entries {
        println!("{}", serde_json::to_string(entry)?);
    }
    Ok(())
}

fn output_summary(entries: &[CommitRecord]) {
    println!("{}", style("Export Summary").bold());
    println!("{}", "─".repeat(50));

    let unique_repos: HashSet<_> = entries.iter().map(|e| &e.repo).collect();
    println!("Total commits: {}", style(entries.len()).cyan());
    println!("Repositories with commits: {}", style(unique_repos.len()).cyan());

    if let (Some(first), Some(last)) = (entries.first(), entries.last()) {
        println!(
            "Date range: {} to {}",
            style(first.timestamp.format("%Y-%m-%d")).dim(),
            style(last.timestamp.format("%Y-%m-%d")).dim()
        );
    }

    println!("\nUse --json or --ndjson flags to export the raw data.");
}
