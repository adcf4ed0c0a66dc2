use std::sync::Arc;

use team_tracker_core::goals::GoalListService;
use team_tracker_goals_client::GoalsClient;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// command output. Records from the `log` facade are bridged in.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Wires the HTTP client into a fresh goal list controller.
pub fn build_goal_list(config: &Config) -> anyhow::Result<GoalListService> {
    let client = GoalsClient::with_timeout(&config.api_base_url, config.request_timeout)?;
    tracing::debug!("Using goals API at {}", client.base_url());
    Ok(GoalListService::new(Arc::new(client)))
}
