mod cli;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tower_http::services::ServeDir;

use cli::{Cli, Command};
use tasklist::db::Store;
use tasklist::server::{self, AppState};
use tasklist::{ops, output};

fn default_db_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    Ok(cwd.join("tasks.db"))
}

fn resolve_db_path(cli_db: Option<String>) -> Result<PathBuf> {
    match cli_db {
        Some(p) => Ok(PathBuf::from(p)),
        None => default_db_path(),
    }
}

fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

fn open_db(db_path: &Path) -> Result<Store> {
    info!("database path is {}", db_path.display());
    let store = Store::open(db_path)?;
    info!("ensuring schema");
    store.ensure_schema()?;
    Ok(store)
}

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();
    let db_path = resolve_db_path(cli.db)?;
    ensure_db_dir(&db_path)?;

    match cli.command.unwrap_or_default() {
        Command::Serve { bind, static_dir } => {
            let store = open_db(&db_path)?;
            let app = server::router(AppState::new(store))
                .nest_service("/static", ServeDir::new(static_dir));
            let listener = tokio::net::TcpListener::bind(&bind)
                .await
                .with_context(|| format!("failed to bind {bind}"))?;
            server::serve(listener, app).await?;
        }

        Command::Init => {
            open_db(&db_path)?;
            eprintln!("Initialized {}", db_path.display());
        }

        Command::List { json } => {
            let store = open_db(&db_path)?;
            let tasks = ops::list_tasks(&*store.conn()?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                print!("{}", output::format_task_list(&tasks));
            }
        }
    }

    Ok(())
}
