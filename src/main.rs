use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use responder::config::{ServerConfig, StorageArgs};
use responder::{api, store::JsonFileStore};

#[derive(Parser)]
#[command(name = "responder")]
#[command(about = "Question and answer API backed by a JSON document")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Used when no subcommand is given.
    #[command(flatten)]
    serve: ServerConfig,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Responder server
    Serve(ServerConfig),
    /// Create an empty question document if none exists
    Init(StorageArgs),
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "responder=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&config.storage.path);
    store
        .ensure_document()
        .with_context(|| format!("Failed to prepare {}", store.path().display()))?;

    tracing::info!("Serving questions from {}", store.path().display());
    let app = api::create_router(Arc::new(store));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Responder listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve(config)) => serve(config).await?,
        Some(Commands::Init(storage)) => {
            let store = JsonFileStore::new(&storage.path);
            if store.ensure_document()? {
                println!("Created {}", store.path().display());
            } else {
                println!("{} already exists", store.path().display());
            }
        }
        None => serve(cli.serve).await?,
    }

    Ok(())
}
