//! Domain entities - reaction events, channel rules and derived score records

mod channel;
mod reaction;
mod score;
mod user;

pub use channel::{ChannelConfig, ChannelDescriptor, ReactionRule, ReactionRules};
pub use reaction::{DedupKey, ReactionEvent};
pub use score::{Leaderboard, LeaderboardRow, ScoreChangeRecord, UserScoreAggregate};
pub use user::{User, UserDirectory};
