//! Score rule evaluation
//!
//! Decides whether a single reaction event earns points under a channel's
//! rules, and how many.

use scores_core::{ChannelConfig, ChannelId, ReactionEvent};

/// Why an event earns no points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Logged for another channel
    ForeignChannel,
    /// Reaction has no rule in this channel
    UnconfiguredReaction,
    /// Issuer is neither the admin nor allowed by the thread-author restriction
    UnauthorizedIssuer,
}

impl Rejection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ForeignChannel => "foreign_channel",
            Self::UnconfiguredReaction => "unconfigured_reaction",
            Self::UnauthorizedIssuer => "unauthorized_issuer",
        }
    }
}

/// Rule evaluator bound to one channel
#[derive(Debug, Clone, Copy)]
pub struct ScoreRuleEvaluator<'a> {
    channel_id: &'a ChannelId,
    config: &'a ChannelConfig,
}

impl<'a> ScoreRuleEvaluator<'a> {
    /// Create a new ScoreRuleEvaluator
    pub fn new(channel_id: &'a ChannelId, config: &'a ChannelConfig) -> Self {
        Self { channel_id, config }
    }

    /// Signed score change for the event, `None` when it does not qualify
    #[inline]
    pub fn evaluate(&self, event: &ReactionEvent) -> Option<i64> {
        self.assess(event).ok()
    }

    /// Like [`evaluate`](Self::evaluate), reporting the failed condition
    pub fn assess(&self, event: &ReactionEvent) -> Result<i64, Rejection> {
        if event.channel_id != *self.channel_id {
            return Err(Rejection::ForeignChannel);
        }

        let rule = self
            .config
            .rule_for(&event.reaction)
            .ok_or(Rejection::UnconfiguredReaction)?;

        // Admin first: the admin's reactions count even under the thread-author restriction.
        let authorized = self.config.is_admin(&event.issuer_id)
            || !self.config.restrict_reactions_to_thread_authors
            || event.is_issued_by_thread_author();
        if !authorized {
            return Err(Rejection::UnauthorizedIssuer);
        }

        Ok(rule.score_increment * event.event_type.sign())
    }
}
