//! Command-line argument wrappers and command handlers
//!
//! Argument structs carry the clap attributes and convert into the core
//! parameter types from [`errand_core::params`], so the core stays free of
//! CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → RoutePlanner
//! ```
//!
//! Commands that read a task file convert through `into_params`, which can
//! fail; the rest use `From`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use errand_core::{
    display::{DeleteResult, Favorites, SaveResult, VisitingOrder},
    models::{ClockTime, Coordinate, RouteMode},
    params::{FavoriteKey, ListFavorites, OrderTasks, PlanRoute, SaveFavorite, DEFAULT_USER},
    RoutePlanner,
};
use serde::Serialize;

use crate::{renderer::TerminalRenderer, tasks::load_tasks};

/// Route and time a list of errands
#[derive(Args)]
pub struct PlanArgs {
    /// JSON or YAML file with the errands to run
    pub tasks: PathBuf,

    /// Starting point, also where the route ends
    #[arg(long, help = "Starting point as LAT,LNG")]
    pub origin: Coordinate,

    /// Departure time today (HH:MM); defaults to now
    #[arg(long, help = "Departure time today as HH:MM (defaults to now)")]
    pub depart: Option<ClockTime>,

    /// Route preference profile
    #[arg(long, default_value = "balanced", help = "balanced, economy or fast")]
    pub mode: RouteMode,

    /// Order stops by proximity, ignoring constraints
    #[arg(long)]
    pub delivery: bool,

    /// Suggest breaks on long drives
    #[arg(long)]
    pub rest_stops: bool,

    /// Suggest when to leave to beat the earliest closing time
    #[arg(long)]
    pub suggest_departure: bool,

    /// Look for a similar favorite saved by this user
    #[arg(long)]
    pub user: Option<String>,
}

impl PlanArgs {
    /// Load the task file and build the core parameters.
    pub fn into_params(self) -> Result<PlanRoute> {
        Ok(PlanRoute {
            tasks: load_tasks(&self.tasks)?,
            origin: self.origin,
            departure: self.depart,
            mode: self.mode,
            delivery: self.delivery,
            rest_stops: self.rest_stops,
            suggest_departure: self.suggest_departure,
            user_id: self.user,
        })
    }
}

/// Preview the visiting order
#[derive(Args)]
pub struct OrderArgs {
    /// JSON or YAML file with the errands to run
    pub tasks: PathBuf,

    /// Starting point, required with --delivery
    #[arg(long, help = "Starting point as LAT,LNG (required with --delivery)")]
    pub origin: Option<Coordinate>,

    /// Order stops by proximity, ignoring constraints
    #[arg(long)]
    pub delivery: bool,
}

impl OrderArgs {
    pub fn into_params(self) -> Result<OrderTasks> {
        Ok(OrderTasks {
            tasks: load_tasks(&self.tasks)?,
            origin: self.origin,
            delivery: self.delivery,
        })
    }
}

/// Save the errands in a task file as a named favorite
#[derive(Args)]
pub struct SaveFavoriteArgs {
    /// Name of the favorite; saving an existing name replaces it
    pub name: String,

    /// JSON or YAML file with the errands to remember
    pub tasks: PathBuf,

    #[arg(long, default_value = DEFAULT_USER)]
    pub user: String,
}

impl SaveFavoriteArgs {
    pub fn into_params(self) -> Result<SaveFavorite> {
        let tasks = load_tasks(&self.tasks)?;
        Ok(SaveFavorite {
            user_id: self.user,
            name: self.name,
            task_names: tasks.into_iter().map(|t| t.name).collect(),
            itinerary: None,
        })
    }
}

/// List saved favorites
#[derive(Args)]
pub struct ListFavoritesArgs {
    #[arg(long, default_value = DEFAULT_USER)]
    pub user: String,
}

impl From<ListFavoritesArgs> for ListFavorites {
    fn from(val: ListFavoritesArgs) -> Self {
        ListFavorites { user_id: val.user }
    }
}

/// Delete a saved favorite
#[derive(Args)]
pub struct DeleteFavoriteArgs {
    /// Name of the favorite to delete
    pub name: String,

    #[arg(long, default_value = DEFAULT_USER)]
    pub user: String,
}

impl From<DeleteFavoriteArgs> for FavoriteKey {
    fn from(val: DeleteFavoriteArgs) -> Self {
        FavoriteKey {
            user_id: val.user,
            name: val.name,
        }
    }
}

#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// Save a favorite route
    #[command(alias = "s")]
    Save(SaveFavoriteArgs),
    /// List favorite routes
    #[command(aliases = ["l", "ls"])]
    List(ListFavoritesArgs),
    /// Delete a favorite route
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteFavoriteArgs),
}

/// Runs commands against a planner and prints the results.
pub struct Cli {
    planner: RoutePlanner,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(planner: RoutePlanner, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            planner,
            renderer,
            json,
        }
    }

    pub async fn plan(&self, args: PlanArgs) -> Result<()> {
        let params = args.into_params()?;
        let plan = self
            .planner
            .plan_route(&params)
            .await
            .context("Failed to plan route")?;

        self.emit(&plan, &plan)
    }

    pub fn order(&self, args: OrderArgs) -> Result<()> {
        let params = args.into_params()?;
        let order = self
            .planner
            .order_tasks(&params)
            .context("Failed to order tasks")?;

        self.emit(&order, &VisitingOrder(order.clone()))
    }

    pub async fn handle_favorite_command(&self, command: FavoriteCommands) -> Result<()> {
        match command {
            FavoriteCommands::Save(args) => {
                let params = args.into_params()?;
                let favorite = self
                    .planner
                    .save_favorite(&params)
                    .await
                    .context("Failed to save favorite")?;
                self.emit(&favorite, &SaveResult::new(favorite.clone()))
            }
            FavoriteCommands::List(args) => {
                let favorites = self
                    .planner
                    .list_favorites(&args.into())
                    .await
                    .context("Failed to list favorites")?;
                self.emit(&favorites, &Favorites(favorites.clone()))
            }
            FavoriteCommands::Delete(args) => {
                let key: FavoriteKey = args.into();
                self.planner
                    .delete_favorite(&key)
                    .await
                    .context("Failed to delete favorite")?;
                self.emit(&key, &DeleteResult::new(key.clone()))
            }
        }
    }

    /// Prints `value` as JSON when requested, otherwise renders `display`.
    fn emit<T, D>(&self, value: &T, display: &D) -> Result<()>
    where
        T: Serialize + ?Sized,
        D: std::fmt::Display + ?Sized,
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        } else {
            self.renderer.render(&display.to_string())
        }
    }
}
