//! Ingestion of raw tables
//!
//! Every table starts with a header row, which is skipped. Rows whose cells
//! are all empty are skipped too. Row numbers in errors are 1-based and count
//! the header, so they match what a spreadsheet shows.

use scores_core::{
    ChannelConfig, ChannelDescriptor, ChannelId, DomainError, DomainResult, EventType,
    ReactionEvent, User, UserDirectory, UserId,
};
use serde_json::Value;
use tracing::debug;

use super::RawTable;

const USERS: &str = "users";
const REACTIONS: &str = "reactions";
const CONFIG: &str = "config";

/// Text of a cell; null and missing cells are empty
fn cell_text(cell: Option<&Value>) -> String {
    match cell {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// One data row with its position for error reporting
struct Row<'a> {
    table: &'static str,
    number: usize,
    cells: &'a [Value],
}

impl Row<'_> {
    fn text(&self, column: usize) -> String {
        cell_text(self.cells.get(column))
    }

    fn optional(&self, column: usize) -> Option<String> {
        let text = self.text(column);
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn required(&self, column: usize, name: &str) -> DomainResult<String> {
        self.optional(column)
            .ok_or_else(|| self.invalid(format!("missing {name}")))
    }

    fn user_id(&self, column: usize, name: &str) -> DomainResult<UserId> {
        UserId::parse(&self.required(column, name)?)
            .map_err(|e| self.invalid(format!("{name}: {e}")))
    }

    fn require_width(&self, width: usize) -> DomainResult<()> {
        if self.cells.len() < width {
            return Err(self.invalid(format!(
                "expected at least {width} columns, found {}",
                self.cells.len()
            )));
        }
        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> DomainError {
        DomainError::invalid_row(self.table, self.number, reason)
    }
}

/// Data rows of `table`, numbered as displayed
fn data_rows<'a>(table: &'static str, raw: &'a RawTable) -> impl Iterator<Item = Row<'a>> {
    raw.iter()
        .enumerate()
        .skip(1)
        .map(move |(index, cells)| Row {
            table,
            number: index + 1,
            cells,
        })
        .filter(|row| {
            !row
                .cells
                .iter()
                .all(|cell| cell_text(Some(cell)).trim().is_empty())
        })
}

/// Parse the user directory table: `id`, `name`
pub fn parse_users(raw: &RawTable) -> DomainResult<UserDirectory> {
    let mut directory = UserDirectory::new();

    for row in data_rows(USERS, raw) {
        row.require_width(2)?;
        let id = row.user_id(0, "id")?;
        if let Some(previous) = directory.insert(User::new(id, row.text(1))) {
            debug!(user = %previous.id, row = row.number, "Duplicate directory entry replaced");
        }
    }

    Ok(directory)
}

/// Parse the reaction log table in arrival order
///
/// Columns: timestamp, issuer, target, channel, reaction, event type, thread
/// id, thread author, message text and, for newer rows, message id.
pub fn parse_reaction_log(raw: &RawTable) -> DomainResult<Vec<ReactionEvent>> {
    data_rows(REACTIONS, raw)
        .map(|row| -> DomainResult<ReactionEvent> {
            row.require_width(6)?;

            let issuer = row.user_id(1, "issuer")?;
            let target = row.user_id(2, "target")?;
            let channel = ChannelId::parse(&row.required(3, "channel")?)
                .map_err(|e| row.invalid(format!("channel: {e}")))?;
            let reaction = row.required(4, "reaction")?;
            let event_type =
                EventType::parse(&row.text(5)).map_err(|e| row.invalid(e.to_string()))?;

            let thread_author = row
                .optional(7)
                .map(|id| UserId::parse(&id))
                .transpose()
                .map_err(|e| row.invalid(format!("thread author: {e}")))?;

            Ok(
                ReactionEvent::new(issuer, target, channel, reaction, event_type)
                    .with_timestamp(row.text(0))
                    .with_thread(row.text(6), thread_author)
                    .with_message(row.text(8), row.optional(9)),
            )
        })
        .collect()
}

/// Find a channel's row in the configuration table
///
/// The first matching row wins. Only that row's configuration is parsed.
pub fn find_channel(raw: &RawTable, channel_id: &ChannelId) -> DomainResult<ChannelDescriptor> {
    let row = data_rows(CONFIG, raw)
        .find(|row| row.text(0).trim() == channel_id.as_str())
        .ok_or_else(|| DomainError::ChannelNotConfigured(channel_id.clone()))?;

    row.require_width(3)?;
    let sheet_name = row.required(1, "sheet basename")?;
    let config = ChannelConfig::from_json(&row.required(2, "channel configuration")?)?;

    Ok(ChannelDescriptor {
        channel_id: channel_id.clone(),
        sheet_name,
        config,
        leaderboard_link: row.optional(3),
    })
}
