//! # team-tracker
//!
//! Command-line front end for the team goals API:
//! - `team-tracker list [--status S]`: show the goal table
//! - `team-tracker add --title T [...]`: create a goal
//! - `team-tracker edit <ID> [...]`: change some fields of a goal
//! - `team-tracker delete <ID>`: remove a goal

use std::io::Write;

use clap::Parser;
use team_tracker_cli::commands::{self, GoalCommands};
use team_tracker_cli::config::Config;
use team_tracker_cli::{build_goal_list, init_tracing};

/// Track team goals from the terminal.
#[derive(Parser)]
#[command(name = "team-tracker", version, about)]
struct Cli {
    /// Goals API base URL (overrides TT_API_BASE_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: GoalCommands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url;
    }
    init_tracing(config.log_format);

    let mut goals = build_goal_list(&config)?;
    let output = commands::execute(&cli.command, &mut goals).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
