mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use layout::config::EngineConfig;
use layout::store::{FileStore, Workspace};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::commands::CliError;

#[derive(Parser, Debug)]
#[command(name = "furnispace", about = "Inspect and manage stored furnispace designs")]
struct Cli {
    /// Directory holding the design store.
    #[arg(long, env = "FURNISPACE_STORE_DIR", default_value = ".furnispace")]
    store_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the design stored for a workspace.
    Show {
        #[arg(long, value_enum, default_value_t = WorkspaceArg::TwoD)]
        workspace: WorkspaceArg,
    },
    /// List saved designs.
    Designs,
    /// Mark a saved design as current; 3D designs are also staged for the 3D view.
    OpenDesign { id: String },
    DeleteDesign { id: String },
    /// Replace the stored 2D walls with a rectangular room, in feet.
    ResetRoom { width: f64, length: f64 },
    /// Stage the stored 2D design for the 3D view.
    Handoff,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum WorkspaceArg {
    #[value(name = "2d")]
    TwoD,
    #[value(name = "3d")]
    ThreeD,
}

impl From<WorkspaceArg> for Workspace {
    fn from(arg: WorkspaceArg) -> Self {
        match arg {
            WorkspaceArg::TwoD => Self::TwoD,
            WorkspaceArg::ThreeD => Self::ThreeD,
        }
    }
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EngineConfig::from_env()?;
    let mut store = FileStore::open(&cli.store_dir)?;
    tracing::debug!(store_dir = %cli.store_dir.display(), "store opened");

    let out = match cli.command {
        Command::Show { workspace } => commands::show(&store, &config, workspace.into())?,
        Command::Designs => commands::designs(&store)?,
        Command::OpenDesign { id } => commands::open_design(&mut store, &id)?,
        Command::DeleteDesign { id } => commands::delete_design(&mut store, &id)?,
        Command::ResetRoom { width, length } => commands::reset_room(store, config, width, length)?.0,
        Command::Handoff => commands::handoff(store, config)?.0,
    };
    print_json(&out)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
