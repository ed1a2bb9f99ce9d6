mod app_state;
mod cli;

use courier_config::CourierConfig;
use courier_providers::AccountRegistry;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("courier=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "courier=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Courier v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let mut config = match &args.config {
        Some(path) => courier_config::load_from_path(std::path::Path::new(path)),
        None => courier_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        CourierConfig::default()
    });

    if let Some(dir) = &args.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }

    // Load the account registry
    let accounts_path = match config.storage.accounts_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("Cannot resolve data directory: {e}");
            std::process::exit(1);
        }
    };
    let registry = match AccountRegistry::load(accounts_path) {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("Failed to load account registry: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("Registry has {} account(s)", registry.list().len());

    // Create event loop and run. The UI shell delivers transport requests
    // through the loop's user-event proxy.
    let event_loop = EventLoop::<app_state::Request>::with_user_event()
        .build()
        .expect("failed to create event loop");
    let mut app = app_state::CourierApp::new(config, registry);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
