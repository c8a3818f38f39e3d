//! Export tables
//!
//! Score cells are JSON numbers; a missing score change is an empty string so
//! the table pastes into a spreadsheet as a blank cell.

use scores_core::{Leaderboard, ScoreChangeRecord};
use serde_json::{json, Value};

use super::Table;

/// Header of the score-change ledger
pub const LEDGER_HEADER: [&str; 4] = ["issuer name", "target name", "score change", "Comment"];

const DUPLICATE_COMMENT: &str = "Duplication detected";

/// One row per ledger record, in log order
pub fn ledger_table(records: &[ScoreChangeRecord]) -> Table {
    let mut table = Table::new(LEDGER_HEADER.iter().map(ToString::to_string).collect());

    for record in records {
        let score = record.score_change.map_or_else(|| json!(""), |change| json!(change));
        let comment = if record.duplicate_suppressed {
            DUPLICATE_COMMENT
        } else {
            ""
        };
        table.push(vec![
            json!(record.issuer_name),
            json!(record.target_name),
            score,
            json!(comment),
        ]);
    }

    table
}

/// Ranked rows with one points column per configured reaction
pub fn leaderboard_table(leaderboard: &Leaderboard) -> Table {
    let header = ["user", "score", "rank"]
        .into_iter()
        .map(ToString::to_string)
        .chain(
            leaderboard
                .reactions
                .iter()
                .map(|reaction| format!("[{reaction}]'s points")),
        )
        .collect();
    let mut table = Table::new(header);

    for row in &leaderboard.rows {
        let mut cells: Vec<Value> = vec![json!(row.name), json!(row.total_score), json!(row.rank)];
        cells.extend(row.reaction_scores.iter().map(|score| json!(score)));
        table.push(cells);
    }

    table
}
