//! Reaction scores batch runner
//!
//! Run with:
//! ```bash
//! cargo run -p scores-cli
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use scores_common::{
    try_init_tracing, try_init_tracing_with_config, AppConfig, AppError, AppResult,
};
use tracing::{error, info};

fn main() {
    // Tracing follows the configuration when it loads, so config errors are still logged.
    let config = AppConfig::from_env();
    let tracing_init = match &config {
        Ok(config) => try_init_tracing_with_config(&config.tracing_config()),
        Err(_) => try_init_tracing(),
    };
    if let Err(e) = tracing_init {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let result = config.map_err(AppError::from).and_then(run);
    if let Err(e) = result {
        error!(error = %e, code = e.error_code(), "Scoring run failed");
        std::process::exit(e.exit_code());
    }
}

fn run(config: AppConfig) -> AppResult<()> {
    info!(
        env = ?config.app.env,
        channel = %config.channel_id,
        output = ?config.output,
        "Configuration loaded"
    );

    scores_cli::run(config)
}
