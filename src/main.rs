use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use travel_scout::config::{load_config, AppConfig, DATA_URL_ENV};
use travel_scout::display::{run_lookup, DisplaySurface};
use travel_scout::lookup::Recommender;
use travel_scout::source::source_for;

const CLEAR_COMMAND: &str = ":clear";

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load error: {}. Using defaults.", e);
            AppConfig::default()
        }
    }
    .with_data_url_override(std::env::var(DATA_URL_ENV).ok());

    let source = match source_for(&config.data_url, &config.user_agent) {
        Ok(s) => s,
        Err(e) => {
            error!("Cannot set up dataset source {}: {}", config.data_url, e);
            return;
        }
    };
    info!("Dataset location: {}", config.data_url);

    let recommender = Arc::new(Recommender::new(source).with_display_limit(config.display_limit));
    let surface = Arc::new(DisplaySurface::new());

    info!("Type a keyword (beach, temple, country) per line, or {} to reset.", CLEAR_COMMAND);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = JoinSet::new();
    loop {
        while let Some(result) = pending.try_join_next() {
            log_task_result(result);
        }

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        };

        if line.trim() == CLEAR_COMMAND {
            surface.clear().await;
            info!("Results cleared.");
            continue;
        }

        // The ticket is taken in input order, before the task can be scheduled.
        let ticket = surface.begin();
        let recommender = recommender.clone();
        let surface = surface.clone();
        pending.spawn(async move {
            if let Some(panel) = run_lookup(ticket, &line, &*recommender, &surface).await {
                println!("{}\n", panel.to_text());
            }
        });
    }

    while let Some(result) = pending.join_next().await {
        log_task_result(result);
    }
}

fn log_task_result(result: Result<(), tokio::task::JoinError>) {
    if let Err(e) = result {
        warn!("Lookup task failed: {}", e);
    }
}
