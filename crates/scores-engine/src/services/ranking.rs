//! Ranking and aggregation
//!
//! Sums qualifying ledger entries per target user and ranks users with dense
//! ranks: tied scores share a rank and the next score gets the next integer.

use std::cmp::Ordering;
use std::collections::HashMap;

use scores_core::{
    ChannelConfig, DomainResult, Leaderboard, LeaderboardRow, ScoreChangeRecord, UserId,
    UserScoreAggregate,
};
use tracing::{info, instrument};

/// Per-user totals in order of first qualifying record
pub fn aggregate_by_user(records: &[ScoreChangeRecord]) -> DomainResult<Vec<UserScoreAggregate>> {
    let mut index_by_user: HashMap<&UserId, usize> = HashMap::new();
    let mut aggregates: Vec<UserScoreAggregate> = Vec::new();

    for record in records {
        let Some(change) = record.effective_change() else {
            continue;
        };

        let slot = *index_by_user.entry(&record.target_id).or_insert_with(|| {
            aggregates.push(UserScoreAggregate::new(
                record.target_id.clone(),
                record.target_name.clone(),
            ));
            aggregates.len() - 1
        });
        aggregates[slot].add(&record.reaction, change)?;
    }

    Ok(aggregates)
}

/// Highest score first; equal scores by name, then id
fn leaderboard_order(a: &UserScoreAggregate, b: &UserScoreAggregate) -> Ordering {
    b.total_score
        .cmp(&a.total_score)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Dense ranks for scores already sorted in descending order, starting at 1
pub fn dense_ranks(sorted_scores: &[i64]) -> Vec<u32> {
    let mut rank = 0_u32;
    let mut previous = None;
    sorted_scores
        .iter()
        .map(|&score| {
            if previous != Some(score) {
                rank += 1;
                previous = Some(score);
            }
            rank
        })
        .collect()
}

/// Build the ranked leaderboard for a channel's ledger
///
/// Users without a qualifying record are left out. Reaction columns follow
/// the configuration's rule order.
#[instrument(skip_all, fields(records = records.len()))]
pub fn aggregate(records: &[ScoreChangeRecord], config: &ChannelConfig) -> DomainResult<Leaderboard> {
    let mut users = aggregate_by_user(records)?;
    users.sort_by(leaderboard_order);

    let reactions: Vec<String> = config
        .reaction_rules
        .reactions()
        .map(ToString::to_string)
        .collect();

    let scores: Vec<i64> = users.iter().map(|u| u.total_score).collect();
    let ranks = dense_ranks(&scores);

    let rows: Vec<LeaderboardRow> = users
        .into_iter()
        .zip(ranks)
        .map(|(user, rank)| LeaderboardRow {
            reaction_scores: reactions.iter().map(|r| user.score_for(r)).collect(),
            user_id: user.id,
            name: user.name,
            total_score: user.total_score,
            rank,
        })
        .collect();

    info!(
        users = rows.len(),
        distinct_ranks = rows.last().map_or(0, |row| row.rank),
        "Leaderboard ranked"
    );

    Ok(Leaderboard { reactions, rows })
}
