//! # scores-cli
//!
//! Batch runner: loads a channel's exported tables, scores its reaction log
//! and prints the requested output to stdout.

pub mod output;
pub mod sources;

use std::io::Write;

use scores_common::{AppConfig, AppError, AppResult, OutputKind};
use scores_core::DomainError;
use scores_engine::setup_hint;
use tracing::{info, warn};

/// Produce the text printed for `config`
pub fn execute(config: &AppConfig) -> AppResult<String> {
    let descriptor = match sources::load_descriptor(&config.sources, &config.channel_id) {
        Ok(descriptor) => descriptor,
        // An unconfigured channel asking for help gets the setup instructions.
        Err(AppError::Domain(DomainError::ChannelNotConfigured(channel)))
            if config.output == OutputKind::Help =>
        {
            warn!(%channel, "Channel not configured, replying with setup instructions");
            return Ok(setup_hint().to_string());
        }
        Err(e) => return Err(e),
    };

    let ctx = sources::load_context(&config.sources, descriptor)?;
    output::render(config.output, &ctx)
}

/// Run the batch job and write its output to stdout
pub fn run(config: AppConfig) -> AppResult<()> {
    let text = execute(&config)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}").map_err(AppError::Output)?;
    stdout.flush().map_err(AppError::Output)?;

    info!(output = ?config.output, "Run completed");
    Ok(())
}
