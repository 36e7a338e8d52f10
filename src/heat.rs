use anyhow::Context;
use chrono::{Local, Utc};
use console::style;

use crate::aggregate::{by_calendar_date, heatmap_level};
use crate::cli::CommonArgs;
use crate::github::{fetch_snapshot, report_fetch_issues, GitHubClient};
use crate::model::{DateCount, HeatOutput, RepoFilter, Snapshot, SCHEMA_VERSION};

const LEVEL_GLYPHS: [&str; 5] = [" ", "░", "▒", "▓", "█"];

pub fn exec(
    common: CommonArgs,
    json: bool,
    ndjson: bool,
    filter: Option<String>,
) -> anyhow::Result<()> {
    let client = GitHubClient::new(common.token.clone());
    let snapshot = fetch_snapshot(&client, &common.user, common.days)
        .context("Failed to fetch commit activity")?;
    report_fetch_issues(&snapshot);

    let filter = snapshot
        .resolve_filter(filter.as_deref())
        .context("Failed to resolve repository filter")?;

    // Only the heatmap honors the repository filter; see the stats charts,
    // which always run over the full record set.
    let records = snapshot.filtered_records(&filter);
    let today = Local::now().date_naive();
    let days = by_calendar_date(&records, snapshot.window_days, today, &Local);
    let max_count = days.iter().map(|d| d.count).max().unwrap_or(0);

    if json {
        output_json(&days, max_count, &snapshot, &filter)?;
    } else if ndjson {
        output_ndjson(&days)?;
    } else {
        output_heatmap(&days, max_count, &snapshot, &filter);
    }

    Ok(())
}

fn output_json(
    days: &[DateCount],
    max_count: u32,
    snapshot: &Snapshot,
    filter: &RepoFilter,
) -> anyhow::Result<()> {
    let output = HeatOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        user: snapshot.user.login.clone(),
        window_days: snapshot.window_days,
        filter: filter.label().to_string(),
        max_count,
        days: days.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(days: &[DateCount]) -> anyhow::Result<()> {
    for day in days {
        println!("{}", serde_json::to_string(day)?);
    }
    Ok(())
}

fn output_heatmap(days: &[DateCount], max_count: u32, snapshot: &Snapshot, filter: &RepoFilter) {
    println!(
        "{}",
        style(format!(
            "Commit heatmap for {} (last {} days, filter: {})",
            snapshot.user.login,
            snapshot.window_days,
            filter.label()
        ))
        .bold()
    );
    println!("{}", "─".repeat(50));

    for day in days {
        let level = heatmap_level(day.count, max_count);
        let glyph = LEVEL_GLYPHS[level as usize];
        println!(
            "{} {} commits: {:>3}",
            day.date.format("%Y-%m-%d (%a)"),
            style(glyph).green(),
            day.count
        );
    }

    println!("\n{}", style("Legend").bold());
    println!("  {} commit intensity (low to high)", style("░▒▓█").green());
}
