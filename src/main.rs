use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use roomplan::camera::{Camera, Point};
use roomplan::catalog::DEFAULT_CATALOG;
use roomplan::clamp::clamp_position;
use roomplan::config::{ConfigError, EngineConfig};
use roomplan::layout::{ItemId, LayoutError, Project};
use roomplan::measure::wall_distances;
use roomplan::reconcile::diff;
use roomplan::snap::{SnapSettings, snap};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("no item with id {0}")]
    UnknownItem(ItemId),
    #[error("{0} item(s) outside the room")]
    OutOfBounds(usize),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "roomplan", about = "Inspect and check room layout projects")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the built-in furniture presets.
    Catalog,
    /// Validate a project file and list items outside the room.
    Check { file: PathBuf },
    /// Print wall distances for every item, or one.
    Measure {
        file: PathBuf,
        #[arg(long)]
        item: Option<ItemId>,
    },
    /// Snap and clamp a candidate position for an item as a drag would.
    Snap {
        file: PathBuf,
        #[arg(long)]
        item: ItemId,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Print the item changes between two project files.
    Diff { old: PathBuf, new: PathBuf },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Catalog => print_json(&serde_json::to_value(DEFAULT_CATALOG)?),
        Command::Check { file } => run_check(&file),
        Command::Measure { file, item } => run_measure(&file, item),
        Command::Snap { file, item, x, y } => run_snap(&file, item, Point::new(x, y)),
        Command::Diff { old, new } => {
            let old = load_project(&old)?;
            let new = load_project(&new)?;
            print_json(&serde_json::to_value(diff(&old.items, &new.items))?)
        }
    }
}

fn run_check(file: &Path) -> Result<(), CliError> {
    let project = load_project(file)?;
    let outside = project.items.out_of_bounds(&project.room);
    print_json(&json!({
        "room": project.room,
        "items": project.items.len(),
        "out_of_bounds": outside,
    }))?;
    if outside.is_empty() { Ok(()) } else { Err(CliError::OutOfBounds(outside.len())) }
}

fn run_measure(file: &Path, only: Option<ItemId>) -> Result<(), CliError> {
    let project = load_project(file)?;
    if let Some(id) = only {
        if !project.items.contains(&id) {
            return Err(CliError::UnknownItem(id));
        }
    }
    let rows: Vec<Value> = project
        .items
        .iter()
        .filter(|item| only.is_none_or(|id| id == item.id))
        .map(|item| {
            json!({
                "id": item.id,
                "name": item.name,
                "distances": wall_distances(item, &project.room),
            })
        })
        .collect();
    print_json(&Value::Array(rows))
}

fn run_snap(file: &Path, id: ItemId, candidate: Point) -> Result<(), CliError> {
    let config = EngineConfig::from_env()?;
    let project = load_project(file)?;
    let item = project.items.get(&id).ok_or(CliError::UnknownItem(id))?;

    let camera = Camera::with_scale(config.pixels_per_meter);
    let settings =
        SnapSettings { grid: config.grid_unit, threshold: camera.screen_dist_to_room(config.snap_threshold_px) };
    let result = snap(item, candidate, project.items.items(), settings);
    let position = clamp_position(item, result.position, &project.room);
    tracing::debug!(%id, x = position.x, y = position.y, guides = result.guides.len(), "snap resolved");

    print_json(&json!({
        "id": id,
        "position": position,
        "guides": result.guides,
    }))
}

fn load_project(path: &Path) -> Result<Project, CliError> {
    let text =
        std::fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;
    let project = Project::from_json(&text)?;
    tracing::debug!(path = %path.display(), items = project.items.len(), "loaded project");
    Ok(project)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
