//! Table DTOs for the ingestion and export boundaries
//!
//! This module provides:
//! - Row parsers turning raw spreadsheet-like tables into domain values
//! - Table builders for the ledger and leaderboard exports

pub mod requests;
pub mod responses;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;

/// Rows of JSON scalars as exported from a spreadsheet, header first
pub type RawTable = Vec<Vec<Value>>;

pub use requests::{find_channel, parse_reaction_log, parse_users};
pub use responses::{leaderboard_table, ledger_table, LEDGER_HEADER};

/// Output table: a header row followed by data rows
///
/// Serializes as a plain array of arrays with the header first.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    /// Number of data rows, header excluded
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len() + 1))?;
        seq.serialize_element(&self.header)?;
        for row in &self.rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
