//! Source tables
//!
//! Reads the exported Config, UserList and reaction log tables and assembles
//! the scoring context for the configured channel.

use std::fs;
use std::path::Path;

use scores_common::{AppError, AppResult, SourceConfig};
use scores_core::{ChannelDescriptor, ChannelId};
use scores_engine::dto::{find_channel, parse_reaction_log, parse_users};
use scores_engine::{RawTable, ScoringContext};
use tracing::{debug, info, instrument};

/// Read one JSON table (array of row arrays) from disk
pub fn read_table(path: &Path) -> AppResult<RawTable> {
    let content = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    let table: RawTable = serde_json::from_str(&content).map_err(|e| AppError::table(path, e))?;
    debug!(path = %path.display(), rows = table.len(), "Table loaded");
    Ok(table)
}

/// Look up the channel's row in the Config table
pub fn load_descriptor(sources: &SourceConfig, channel_id: &ChannelId) -> AppResult<ChannelDescriptor> {
    let config_table = read_table(&sources.config_table)?;
    Ok(find_channel(&config_table, channel_id)?)
}

/// Build the scoring context for an already resolved channel
#[instrument(skip_all, fields(channel = %descriptor.channel_id))]
pub fn load_context(sources: &SourceConfig, descriptor: ChannelDescriptor) -> AppResult<ScoringContext> {
    let users = parse_users(&read_table(&sources.users_table)?)?;
    let events = parse_reaction_log(&read_table(&sources.reactions_table)?)?;

    info!(
        sheet = %descriptor.sheet_name,
        users = users.len(),
        events = events.len(),
        "Sources loaded"
    );

    Ok(ScoringContext::new(descriptor, users, events))
}
