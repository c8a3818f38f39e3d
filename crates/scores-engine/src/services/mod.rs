//! Scoring services
//!
//! Rule evaluation, deduplication, ranking and the chat replies built on top
//! of them. Every function here is a pure transform over in-memory inputs.

pub mod context;
pub mod dedup;
pub mod evaluator;
pub mod help;
pub mod podium;
pub mod ranking;

pub use context::{ScoringContext, ScoringService};
pub use dedup::{build_ledger, DeduplicationTracker};
pub use evaluator::{Rejection, ScoreRuleEvaluator};
pub use help::{render_help, setup_hint};
pub use podium::{scores_reply, Podium, PodiumPlace, PODIUM_DEPTH};
pub use ranking::{aggregate, aggregate_by_user, dense_ranks};
