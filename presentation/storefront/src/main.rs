use dotenvy::dotenv;

mod config {
    pub mod app_config;
    pub mod storage_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod session;
}
mod shell {
    pub mod command;
    pub mod error_mapper;
    pub mod notifier;
    pub mod render;
}

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, session::Session};

/// Storefront Entry Point
///
/// Loads configuration, restores the cart from its storage slot, wires the
/// use cases and hands control to the interactive session.
/// - config/: Application configuration (storage backend, log filter)
/// - setup/: Dependency injection and the session loop
/// - shell/: Command parsing, rendering and notification output
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = AppConfig::from_env();

    // 3. Initialize tracing with RUST_LOG env filter
    logger::init(&config.log_filter);

    // 4. Wire dependencies and restore the cart
    let mut container = DependencyContainer::new(&config.storage)?;

    // 5. Run session
    Session::run(&mut container).await?;

    Ok(())
}
