//! # scores-engine
//!
//! Application layer turning a reaction log into a score ledger and a ranked
//! leaderboard, plus the table DTOs used at the ingestion and export boundaries.

pub mod dto;
pub mod services;

pub use dto::{RawTable, Table};
pub use services::{
    aggregate, build_ledger, dense_ranks, render_help, scores_reply, setup_hint,
    DeduplicationTracker, Podium, PodiumPlace, Rejection, ScoreRuleEvaluator, ScoringContext,
    ScoringService,
};
