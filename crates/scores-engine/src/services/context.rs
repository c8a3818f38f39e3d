//! Scoring context - inputs shared by the scoring services
//!
//! Holds the channel descriptor, the user directory and the reaction log for
//! one invocation. Nothing is carried over between invocations.

use scores_core::{
    ChannelConfig, ChannelDescriptor, ChannelId, DomainResult, Leaderboard, ReactionEvent,
    ScoreChangeRecord, UserDirectory,
};
use tracing::{info, instrument};

use super::dedup::build_ledger;
use super::evaluator::ScoreRuleEvaluator;
use super::help::render_help;
use super::podium::{scores_reply, Podium};
use super::ranking::aggregate;

/// Inputs for scoring one channel
#[derive(Debug, Clone)]
pub struct ScoringContext {
    descriptor: ChannelDescriptor,
    users: UserDirectory,
    events: Vec<ReactionEvent>,
}

impl ScoringContext {
    /// Create a new scoring context
    pub fn new(descriptor: ChannelDescriptor, users: UserDirectory, events: Vec<ReactionEvent>) -> Self {
        Self {
            descriptor,
            users,
            events,
        }
    }

    pub fn descriptor(&self) -> &ChannelDescriptor {
        &self.descriptor
    }

    pub fn channel_id(&self) -> &ChannelId {
        &self.descriptor.channel_id
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.descriptor.config
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    /// Reaction log in arrival order
    pub fn events(&self) -> &[ReactionEvent] {
        &self.events
    }

    /// Evaluator bound to this context's channel
    pub fn evaluator(&self) -> ScoreRuleEvaluator<'_> {
        ScoreRuleEvaluator::new(self.channel_id(), self.config())
    }
}

/// Scoring service
pub struct ScoringService<'a> {
    ctx: &'a ScoringContext,
}

impl<'a> ScoringService<'a> {
    /// Create a new ScoringService
    pub fn new(ctx: &'a ScoringContext) -> Self {
        Self { ctx }
    }

    /// One ledger record per logged event, in log order
    #[instrument(skip(self), fields(channel = %self.ctx.channel_id()))]
    pub fn ledger(&self) -> DomainResult<Vec<ScoreChangeRecord>> {
        build_ledger(self.ctx.events(), &self.ctx.evaluator(), self.ctx.users())
    }

    /// Ranked leaderboard for the channel
    #[instrument(skip(self), fields(channel = %self.ctx.channel_id()))]
    pub fn leaderboard(&self) -> DomainResult<Leaderboard> {
        let ledger = self.ledger()?;
        let leaderboard = aggregate(&ledger, self.ctx.config())?;

        info!(
            sheet = %self.ctx.descriptor().sheet_name,
            users = leaderboard.rows.len(),
            "Leaderboard computed"
        );

        Ok(leaderboard)
    }

    /// Top three ranks, `None` when nobody has scored yet
    pub fn podium(&self) -> DomainResult<Option<Podium>> {
        Ok(Podium::from_leaderboard(&self.leaderboard()?))
    }

    /// Text answering `!scores`
    pub fn scores_reply(&self) -> DomainResult<String> {
        Ok(scores_reply(&self.leaderboard()?, self.ctx.descriptor()))
    }

    /// Text answering `!help`
    #[instrument(skip(self), fields(channel = %self.ctx.channel_id()))]
    pub fn help(&self) -> DomainResult<String> {
        render_help(self.ctx.descriptor(), self.ctx.users())
    }
}
