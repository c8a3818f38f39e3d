//! Derived score records - ledger entries, per-user totals and leaderboard rows

use std::collections::BTreeMap;

use crate::error::{DomainError, DomainResult};
use crate::value_objects::UserId;

/// Ledger entry derived from exactly one reaction event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreChangeRecord {
    pub issuer_id: UserId,
    pub issuer_name: String,
    pub target_id: UserId,
    pub target_name: String,
    pub reaction: String,
    /// `None` when the event does not qualify under the channel rules
    pub score_change: Option<i64>,
    /// Event repeats the previous state of its key
    pub duplicate_suppressed: bool,
}

impl ScoreChangeRecord {
    /// Points this record contributes to the leaderboard
    #[inline]
    pub fn effective_change(&self) -> Option<i64> {
        if self.duplicate_suppressed {
            None
        } else {
            self.score_change
        }
    }
}

/// Running totals for one target user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserScoreAggregate {
    pub id: UserId,
    pub name: String,
    pub total_score: i64,
    pub score_by_reaction: BTreeMap<String, i64>,
}

impl UserScoreAggregate {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            total_score: 0,
            score_by_reaction: BTreeMap::new(),
        }
    }

    /// Add a score change to the total and to its reaction bucket
    pub fn add(&mut self, reaction: &str, change: i64) -> DomainResult<()> {
        let overflow = || DomainError::ScoreOverflow(self.id.clone());

        let total = self.total_score.checked_add(change).ok_or_else(overflow)?;
        let bucket = self.score_by_reaction.get(reaction).copied().unwrap_or(0);
        let bucket = bucket.checked_add(change).ok_or_else(overflow)?;

        self.total_score = total;
        self.score_by_reaction.insert(reaction.to_string(), bucket);
        Ok(())
    }

    /// Points earned through one reaction, 0 when none
    pub fn score_for(&self, reaction: &str) -> i64 {
        self.score_by_reaction.get(reaction).copied().unwrap_or(0)
    }
}

/// One ranked leaderboard line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub user_id: UserId,
    pub name: String,
    pub total_score: i64,
    /// Dense rank starting at 1
    pub rank: u32,
    /// Points per configured reaction, aligned with [`Leaderboard::reactions`]
    pub reaction_scores: Vec<i64>,
}

/// Ranked leaderboard for one channel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    /// Configured reactions in rule order
    pub reactions: Vec<String>,
    /// Rows sorted by descending score
    pub rows: Vec<LeaderboardRow>,
}

impl Leaderboard {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose rank is at most `max_rank`
    pub fn top(&self, max_rank: u32) -> impl Iterator<Item = &LeaderboardRow> {
        self.rows.iter().filter(move |row| row.rank <= max_rank)
    }
}
