//! Errand CLI Application
//!
//! Command-line interface for the errand route planner.

mod args;
mod cli;
mod renderer;
mod tasks;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use errand_core::{
    routing::{CachedRouteProvider, DirectionsClient},
    Config, RoutePlannerBuilder,
};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let config = Config::load(config.as_deref()).context("Failed to load configuration")?;

    let mut builder = RoutePlannerBuilder::new()
        .with_database_path(database_file)
        .with_config(&config);

    // Only routing needs an API key; ordering and favorites work offline.
    if command.needs_routing() {
        let client = DirectionsClient::from_config(&config.routing)
            .context("Failed to initialize routing client")?;
        builder = builder.with_provider(Arc::new(CachedRouteProvider::new(
            client,
            config.cache.build(),
        )));
    }

    let planner = builder.build().await.context("Failed to initialize planner")?;
    let cli = Cli::new(planner, TerminalRenderer::new(!no_color), json);

    info!("Errand started");

    match command {
        Plan(args) => cli.plan(args).await,
        Order(args) => cli.order(args),
        Favorite { command } => cli.handle_favorite_command(command).await,
    }
}
