//! Output rendering
//!
//! Tables are printed as JSON arrays of arrays, replies as plain text.

use scores_common::{AppError, AppResult, OutputKind};
use scores_engine::dto::{leaderboard_table, ledger_table};
use scores_engine::{ScoringContext, ScoringService, Table};

fn to_json(table: &Table) -> AppResult<String> {
    serde_json::to_string_pretty(table).map_err(AppError::internal)
}

/// Render the requested output for a loaded context
pub fn render(kind: OutputKind, ctx: &ScoringContext) -> AppResult<String> {
    let service = ScoringService::new(ctx);

    match kind {
        OutputKind::Leaderboard => to_json(&leaderboard_table(&service.leaderboard()?)),
        OutputKind::Ledger => to_json(&ledger_table(&service.ledger()?)),
        OutputKind::Podium => Ok(service.scores_reply()?),
        OutputKind::Help => Ok(service.help()?),
    }
}
