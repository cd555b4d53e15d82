use std::sync::Arc;

use color_eyre::Result;
use directory::JobDirectory;
use server::config::Config;
use server::state::AppState;
use tokio::net::TcpListener;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize color_eyre panic and error handlers
    color_eyre::install()?;

    // Load .env
    dotenvy::dotenv()
        .inspect_err(|_| eprintln!("Failed to read .env file, ignoring."))
        .ok();

    let config = Config::new_from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("Job directory is starting...");

    let directory = match &config.jobs_file {
        Some(path) => {
            info!("Loading jobs from {}", path.display());
            JobDirectory::from_json_file(path)?
        }
        None => JobDirectory::seeded(),
    };
    info!("Loaded {} jobs", directory.len());
    for job in directory.iter() {
        debug!("Job {}: {}", job.id, job.title);
    }

    let app_state = Arc::new(AppState::new(Arc::new(directory)));
    let app = server::app(app_state);

    let server_addr = config.server_addr();
    let listener = TcpListener::bind(&server_addr).await?;
    info!("Listening on http://{}", &server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Job directory shut down gracefully");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(_) => info!("Received SIGINT signal, Shutting down..."),
            Err(e) => {
                error!("Failed to listen for SIGINT signal: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM signal, Shutting down...");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM signal: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
