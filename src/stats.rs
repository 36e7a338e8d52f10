use anyhow::Context;
use chrono::{Local, Utc};
use console::style;

use crate::aggregate::{by_day_of_week, by_hour_of_day, by_month, by_repository};
use crate::cli::CommonArgs;
use crate::github::{fetch_snapshot, report_fetch_issues, GitHubClient};
use crate::insights::{average_commits_per_day, busiest_day, busiest_hour, busiest_repo};
use crate::model::{Snapshot, StatsOutput, SCHEMA_VERSION};
use crate::util::{hour_label, DAY_ABBREV, DAY_NAMES, MONTH_NAMES};

pub fn exec(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    let client = GitHubClient::new(common.token.clone());
    let snapshot = fetch_snapshot(&client, &common.user, common.days)
        .context("Failed to fetch commit activity")?;
    report_fetch_issues(&snapshot);

    if json {
        output_json(&snapshot)?;
    } else {
        output_summary(&snapshot);
    }

    Ok(())
}

fn output_json(snapshot: &Snapshot) -> anyhow::Result<()> {
    let records = &snapshot.records;
    let output = StatsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        user: snapshot.user.login.clone(),
        window_days: snapshot.window_days,
        total_commits: records.len(),
        total_repos: snapshot.repos.len(),
        busiest_day: busiest_day(records, &Local).map(|(i, _)| DAY_NAMES[i].to_string()),
        busiest_hour: busiest_hour(records, &Local).map(|(h, _)| hour_label(h)),
        busiest_repo: busiest_repo(records).map(|(name, _)| name),
        avg_commits_per_day: average_commits_per_day(records.len(), snapshot.window_days),
        skipped: snapshot.skipped,
        failures: snapshot.failures.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_summary(snapshot: &Snapshot) {
    let records = &snapshot.records;

    println!(
        "{}",
        style(format!("Commit activity for {}", snapshot.user.display_name())).bold()
    );
    if let Some(bio) = &snapshot.user.bio {
        println!("{}", style(bio).dim());
    }
    println!("{}", "─".repeat(50));

    println!("Window: last {} days", style(snapshot.window_days).cyan());
    println!("Total commits: {}", style(records.len()).cyan());
    println!("Repositories: {}", style(snapshot.repos.len()).cyan());
    if !snapshot.failures.is_empty() {
        println!(
            "Repositories skipped on error: {}",
            style(snapshot.failures.len()).yellow()
        );
    }

    println!("\n{}", style("Insights").bold());
    let day = busiest_day(records, &Local)
        .map(|(i, _)| DAY_NAMES[i].to_string())
        .unwrap_or_else(|| "n/a".to_string());
    let hour = busiest_hour(records, &Local)
        .map(|(h, _)| hour_label(h))
        .unwrap_or_else(|| "n/a".to_string());
    let repo = busiest_repo(records)
        .map(|(name, _)| name)
        .unwrap_or_else(|| "n/a".to_string());
    println!("Busiest day: {}", style(day).green());
    println!("Busiest hour: {}", style(hour).green());
    println!("Busiest repository: {}", style(repo).green());
    println!(
        "Average commits/day: {}",
        style(average_commits_per_day(records.len(), snapshot.window_days)).green()
    );

    println!("\n{}", style("By weekday").bold());
    let days = by_day_of_week(records, &Local);
    for (i, count) in days.iter().enumerate() {
        println!("  {:<3} {:>4} {}", DAY_ABBREV[i], count, bar(*count, &days));
    }

    println!("\n{}", style("By hour").bold());
    let hours = by_hour_of_day(records, &Local);
    for (i, count) in hours.iter().enumerate() {
        if *count > 0 {
            println!("  {:<5} {:>4} {}", hour_label(i), count, bar(*count, &hours));
        }
    }

    println!("\n{}", style("By month").bold());
    let months = by_month(records, &Local);
    for (i, count) in months.iter().enumerate() {
        if *count > 0 {
            println!("  {:<3} {:>4} {}", MONTH_NAMES[i], count, bar(*count, &months));
        }
    }

    println!("\n{}", style("By repository").bold());
    let repos = by_repository(records);
    if repos.is_empty() {
        println!("  (no commits in window)");
    }
    for (name, count) in repos.iter().take(10) {
        println!("  {:<30} {:>4}", name, count);
    }
    if repos.len() > 10 {
        println!("  … (+{} more)", repos.len() - 10);
    }
}

fn bar(count: u32, series: &[u32]) -> String {
    let max = series.iter().copied().max().unwrap_or(0).max(1);
    let width = (count as usize * 20) / max as usize;
    "▇".repeat(width)
}
