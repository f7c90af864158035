//! admin-tree CLI tool
//!
//! Renders exported back-office records into the shapes the admin API serves, and previews
//! association updates.
//!
//! ## Commands
//!
//! - `menus <file> --view <view>`: menu table, selects, or route configuration
//! - `depts <file> --view <view>`: department table or tree select
//! - `diff --existing <ids> --desired <ids>`: rows an association update would insert/delete
//!
//! Record files are JSON arrays of camelCase records (`id`, `parentId`, `name`, `sort`, ...),
//! already in the order storage returns them. Output is pretty-printed JSON on stdout.

use admin_tree::{
    association::diff,
    config::{ConfigProvider, TomlConfigProvider, TreeConfig},
    dept::{self, DeptRecord},
    menu::{self, MenuRecord},
    record::RecordFilter,
    AdminError,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "admin-tree")]
#[command(author, version, about = "Render back-office records as trees and preview association updates", long_about = None)]
struct Cli {
    /// TOML file holding a [tree] table (defaults apply when absent)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MenuView {
    Table,
    Select,
    TreeSelect,
    Routes,
    NextRoutes,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DeptView {
    Table,
    TreeSelect,
}

#[derive(Subcommand)]
enum Commands {
    /// Render menu records
    Menus {
        /// JSON file with an array of menu records
        path: PathBuf,

        #[arg(long, value_enum, default_value = "table")]
        view: MenuView,

        /// Name filter for the table view
        #[arg(long)]
        name: Option<String>,
    },

    /// Render department records
    Depts {
        /// JSON file with an array of department records
        path: PathBuf,

        #[arg(long, value_enum, default_value = "table")]
        view: DeptView,

        /// Name filter for the table view
        #[arg(long)]
        name: Option<String>,

        /// Status filter for the table view
        #[arg(long)]
        status: Option<i32>,
    },

    /// Show the rows an association update would insert and delete
    Diff {
        /// Currently stored target ids
        #[arg(long, value_delimiter = ',')]
        existing: Vec<i64>,

        /// Target ids after the update
        #[arg(long, value_delimiter = ',')]
        desired: Vec<i64>,

        /// Owner id (e.g. role id) to fill into inserted rows
        #[arg(long, default_value = "0")]
        owner: i64,
    },
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AdminError> {
    tracing::debug!("Reading records from {path:?}");
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AdminError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<TreeConfig, AdminError> {
    match path {
        Some(path) => TomlConfigProvider::new(path).load(),
        None => Ok(TreeConfig::default()),
    }
}

fn run(cli: Cli) -> Result<(), AdminError> {
    let config = load_config(cli.config)?;

    match cli.command {
        Commands::Menus { path, view, name } => {
            let records: Vec<MenuRecord> = read_records(&path)?;
            match view {
                MenuView::Table => {
                    print_json(&menu::list_table(&records, name.as_deref(), &config)?)
                }
                MenuView::Select => print_json(&menu::list_select(&records, &config)?),
                MenuView::TreeSelect => print_json(&menu::list_tree_select(&records, &config)?),
                MenuView::Routes => print_json(&menu::list_routes(&records, &config)?),
                MenuView::NextRoutes => print_json(&menu::list_next_routes(&records, &config)?),
            }
        }

        Commands::Depts {
            path,
            view,
            name,
            status,
        } => {
            let records: Vec<DeptRecord> = read_records(&path)?;
            match view {
                DeptView::Table => {
                    let filter = RecordFilter { name, status };
                    print_json(&dept::list_table(&records, &filter, &config)?)
                }
                DeptView::TreeSelect => print_json(&dept::list_tree_select(&records, &config)?),
            }
        }

        Commands::Diff {
            existing,
            desired,
            owner,
        } => {
            let plan = diff(existing, desired)?.into_plan(owner);
            print_json(&plan)
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error ({}): {e}", e.status_code());
        std::process::exit(1);
    }
}
