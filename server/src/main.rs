use anyhow::Context;

use pantry_core::Config;
use pantry_server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before logging, so RUST_LOG may come from the file too
    let dotenv = Config::load_dotenv(None);

    pantry_core::init_logging();

    match dotenv.context("failed to load .env file")? {
        Some(path) => tracing::info!(path = %path.display(), "Loaded environment file"),
        None => tracing::debug!("No .env file found"),
    }

    let config = Config::from_env().context("failed to load configuration")?;
    let state = AppState::new(config).context("failed to initialize session store")?;

    pantry_server::run(state).await
}
