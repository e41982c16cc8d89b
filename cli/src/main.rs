//! CLI entrypoint for llm-council
//!
//! Boots one of the three council services. The role decides which
//! settings are loaded and which router is served; all wiring happens
//! here, once, at startup.

use anyhow::Result;
use axum::Router;
use clap::{Parser, Subcommand};
use council_infrastructure::ConfigLoader;
use council_server::{
    chairman_router, orchestrator_router, worker_router, ChairmanState, OrchestratorState,
    WorkerState,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "llm-council", about = "LLM council services", version)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    role: Role,
}

#[derive(Subcommand)]
enum Role {
    /// Serve a council worker (generate + review)
    Worker,
    /// Serve the council chairman (final synthesis)
    Chairman,
    /// Serve the orchestrator (full council runs)
    Orchestrator,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let (listen_addr, app) = match cli.role {
        Role::Worker => {
            let settings = ConfigLoader::worker()?;
            info!(model_id = %settings.model_id, "starting worker service");
            (settings.listen_addr.clone(), worker_router(WorkerState::new(&settings)))
        }
        Role::Chairman => {
            let settings = ConfigLoader::chairman()?;
            info!(model_id = %settings.model_id, "starting chairman service");
            (settings.listen_addr.clone(), chairman_router(ChairmanState::new(&settings)))
        }
        Role::Orchestrator => {
            let settings = ConfigLoader::orchestrator()?;
            info!(
                workers = settings.worker_endpoints().len(),
                quorum = settings.quorum,
                "starting orchestrator service"
            );
            (settings.listen_addr.clone(), orchestrator_router(OrchestratorState::new(&settings)))
        }
    };

    serve(&listen_addr, app).await
}

async fn serve(addr: &str, app: Router) -> Result<()> {
    let app = app.layer(TraceLayer::new_for_http());
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
