//! Droidgate — HTTP bridge to a device's Termux:API tools.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use droidgate_core::{credential, DroidgateConfig};
use droidgate_server::{build_router, AppState};

fn resolve_data_dir() -> PathBuf {
    std::env::var("DROIDGATE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "credential" => {
                if args.len() < 3 {
                    eprintln!("Usage: droidgate credential <password>");
                    std::process::exit(1);
                }
                let config = DroidgateConfig::from_env(resolve_data_dir())?;
                let digest = credential::password_digest(&args[2]);
                let body = serde_json::json!({ "password": digest });
                std::fs::write(
                    &config.credential_path,
                    serde_json::to_string_pretty(&body)?,
                )?;
                println!("Credential written to {}", config.credential_path.display());
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("Droidgate — HTTP bridge to the Termux:API tools");
                println!();
                println!("Usage: droidgate [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  credential <password>    Write the hashed credential file");
                println!("  help                     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown command: {}. Use 'droidgate help' for usage.", other);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = DroidgateConfig::from_env(&data_dir)?;
    let port = config.port;

    if !config.credential_path.exists() {
        warn!(
            path = %config.credential_path.display(),
            "credential file missing; authenticated routes will fail until one is provisioned"
        );
    }

    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Droidgate listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
