use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FavoriteCommands, OrderArgs, PlanArgs};

/// Plan multi-stop errand routes
///
/// Errand orders a list of errands by their constraints and closing times,
/// times every leg against a directions service, and warns about places that
/// will be closed on arrival. Named routes can be saved as favorites and are
/// recognised when a similar list is planned again.
#[derive(Parser)]
#[command(version, about, name = "errand")]
pub struct Args {
    /// Path to a YAML configuration file. Defaults to ./.errand.yml, then
    /// $XDG_CONFIG_HOME/errand/errand.yml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite favorites database. Defaults to
    /// $XDG_DATA_HOME/errand/errand.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Errand CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Route and time a list of errands
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Preview the visiting order without contacting the routing service
    #[command(alias = "o")]
    Order(OrderArgs),
    /// Manage favorite routes
    #[command(alias = "f")]
    Favorite {
        #[command(subcommand)]
        command: FavoriteCommands,
    },
}

impl Commands {
    /// Whether the command needs a routing provider.
    pub fn needs_routing(&self) -> bool {
        matches!(self, Commands::Plan(_))
    }
}
