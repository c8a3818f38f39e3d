//! Test fixtures and data generators
//!
//! Tables are built the way a spreadsheet export looks: a header row, then
//! one array of cells per row.

use scores_engine::RawTable;
use serde_json::{json, Value};

/// Channel scored by the fixtures
pub const CHANNEL: &str = "C024BE91L";

/// Channel configuration JSON as stored in the Config sheet
///
/// Kept as text: the key order of `reactionsConfigs` is the column order.
pub fn question_channel_config() -> String {
    r#"{
        "adminUser": "U_ADMIN",
        "restrictReactionsToThreadAuthors": true,
        "reactionsConfigs": {
            "white_check_mark": { "scoreIncrement": 2 },
            "lock": { "scoreIncrement": 1 },
            "trophy": { "scoreIncrement": 10 }
        }
    }"#
    .to_string()
}

/// Config sheet with the fixture channel and an unrelated one
pub fn config_table(link: Option<&str>) -> RawTable {
    vec![
        cells(json!(["Channel", "Sheet basename", "ChannelConfig", "Leaderboard link"])),
        cells(json!(["C_OTHER", "Other", "{}", ""])),
        cells(json!([CHANNEL, "Questions", question_channel_config(), link.unwrap_or_default()])),
    ]
}

/// UserList sheet
pub fn users_table() -> RawTable {
    vec![
        cells(json!(["id", "name"])),
        cells(json!(["U_ALICE", "Alice"])),
        cells(json!(["U_BOB", "Bob"])),
        cells(json!(["U_CAROL", "Carol"])),
        cells(json!(["U_ADMIN", "Dana"])),
    ]
}

/// Builder for reaction log rows
#[derive(Debug, Clone)]
pub struct LogRow {
    pub issuer: &'static str,
    pub target: &'static str,
    pub channel: &'static str,
    pub reaction: &'static str,
    pub event_type: &'static str,
    pub thread_author: &'static str,
    pub message_id: Option<&'static str>,
}

impl LogRow {
    /// A `reaction_added` row in the fixture channel, on a thread Alice started
    pub fn added(issuer: &'static str, target: &'static str, reaction: &'static str) -> Self {
        Self {
            issuer,
            target,
            channel: CHANNEL,
            reaction,
            event_type: "reaction_added",
            thread_author: "U_ALICE",
            message_id: Some("1700000000.000100"),
        }
    }

    pub fn removed(issuer: &'static str, target: &'static str, reaction: &'static str) -> Self {
        Self {
            event_type: "reaction_removed",
            ..Self::added(issuer, target, reaction)
        }
    }

    pub fn on_message(mut self, message_id: &'static str) -> Self {
        self.message_id = Some(message_id);
        self
    }

    pub fn in_channel(mut self, channel: &'static str) -> Self {
        self.channel = channel;
        self
    }

    fn to_cells(&self) -> Vec<Value> {
        let mut row = cells(json!([
            "2024-03-01T10:00:00Z",
            self.issuer,
            self.target,
            self.channel,
            self.reaction,
            self.event_type,
            "1700000000.000001",
            self.thread_author,
            "Use a Mutex around the map"
        ]));
        // Legacy rows stop after the message text.
        if let Some(id) = self.message_id {
            row.push(json!(id));
        }
        row
    }
}

/// Reaction log sheet for the given rows
pub fn reactions_table(rows: &[LogRow]) -> RawTable {
    let header = cells(json!([
        "Date", "Issuer", "Target", "Channel", "Reaction", "Type", "Thread", "Thread author",
        "Message", "Message id"
    ]));
    std::iter::once(header)
        .chain(rows.iter().map(LogRow::to_cells))
        .collect()
}

fn cells(value: Value) -> Vec<Value> {
    match value {
        Value::Array(cells) => cells,
        other => vec![other],
    }
}
