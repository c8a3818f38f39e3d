//! Replay protection and the score ledger
//!
//! The reaction log is append-only and may contain the same logical event
//! more than once (re-ingestion, retried webhooks). For each reaction key
//! only state flips count: added → removed → added is three changes, added →
//! added is one change followed by a suppressed duplicate.

use std::collections::HashMap;

use scores_core::{
    DedupKey, DomainResult, EventType, ReactionEvent, ScoreChangeRecord, UserLookup,
};
use tracing::{debug, info, instrument};

use super::evaluator::ScoreRuleEvaluator;

/// Last event type seen per reaction key, scoped to one ledger run
#[derive(Debug, Default)]
pub struct DeduplicationTracker {
    last_seen: HashMap<DedupKey, EventType>,
}

impl DeduplicationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the event, returning `false` when it repeats its key's last type
    pub fn observe(&mut self, event: &ReactionEvent) -> bool {
        let key = event.dedup_key();
        if self.last_seen.get(&key) == Some(&event.event_type) {
            return false;
        }
        self.last_seen.insert(key, event.event_type);
        true
    }

    /// Number of distinct keys seen so far
    pub fn len(&self) -> usize {
        self.last_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_seen.is_empty()
    }
}

/// Annotate every event of the log with its score change, in log order
///
/// Issuer and target must both be known to `users`.
#[instrument(skip_all, fields(events = events.len()))]
pub fn build_ledger<L>(
    events: &[ReactionEvent],
    evaluator: &ScoreRuleEvaluator<'_>,
    users: &L,
) -> DomainResult<Vec<ScoreChangeRecord>>
where
    L: UserLookup + ?Sized,
{
    let mut tracker = DeduplicationTracker::new();
    let mut ledger = Vec::with_capacity(events.len());
    let mut suppressed = 0_usize;

    for (index, event) in events.iter().enumerate() {
        let issuer = users.resolve(&event.issuer_id)?;
        let target = users.resolve(&event.target_id)?;

        let (score_change, duplicate_suppressed) = if tracker.observe(event) {
            let assessed = evaluator.assess(event);
            if let Err(rejection) = assessed {
                debug!(
                    index,
                    issuer = %event.issuer_id,
                    reaction = %event.reaction,
                    reason = rejection.as_str(),
                    "Reaction does not score"
                );
            }
            (assessed.ok(), false)
        } else {
            suppressed += 1;
            debug!(
                index,
                issuer = %event.issuer_id,
                target = %event.target_id,
                reaction = %event.reaction,
                event_type = %event.event_type,
                logged_at = ?event.logged_at(),
                "Duplicate reaction suppressed"
            );
            (None, true)
        };

        ledger.push(ScoreChangeRecord {
            issuer_id: event.issuer_id.clone(),
            issuer_name: issuer.name.clone(),
            target_id: event.target_id.clone(),
            target_name: target.name.clone(),
            reaction: event.reaction.clone(),
            score_change,
            duplicate_suppressed,
        });
    }

    info!(
        events = events.len(),
        keys = tracker.len(),
        suppressed,
        "Score ledger built"
    );

    Ok(ledger)
}
