use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ghviz")]
#[command(about = "GitHub commit activity visualizer: calendar heatmap, charts, and insights")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "GitHub username to analyze")]
    pub user: String,

    #[arg(
        long,
        default_value_t = 30,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Trailing time window in days"
    )]
    pub days: u32,

    #[arg(long, help = "GitHub API token (falls back to GITHUB_TOKEN)")]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    Heat {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,

        #[arg(long = "interactive", alias = "tui", alias = "ui", help = "Enable interactive terminal UI")]
        interactive: bool,

        #[arg(long, help = "Repository to restrict the heatmap to (other charts stay unfiltered)")]
        filter: Option<String>,
    },
    Stats {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    Export {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Heat { json, ndjson, interactive, filter } => {
                if interactive {
                    crate::tui::run(&self.common)
                } else {
                    crate::heat::exec(self.common, json, ndjson, filter)
                }
            }
            Commands::Stats { json } => crate::stats::exec(self.common, json),
            Commands::Export { json, ndjson } => crate::export::exec(self.common, json, ndjson),
        }
    }
}
