//! # scores-core
//!
//! Domain layer for reaction scoring: identifiers, reaction events, channel rules,
//! score records and the user lookup port.
//! This crate has zero dependencies on infrastructure (files, chat APIs, spreadsheets).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ChannelConfig, ChannelDescriptor, DedupKey, Leaderboard, LeaderboardRow, ReactionEvent,
    ReactionRule, ReactionRules, ScoreChangeRecord, User, UserDirectory, UserScoreAggregate,
};
pub use error::{DomainError, DomainResult};
pub use traits::UserLookup;
pub use value_objects::{ChannelId, EventType, EventTypeParseError, IdParseError, UserId};
