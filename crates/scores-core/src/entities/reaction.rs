//! Reaction event entity - one add or remove of an emoji on a message

use chrono::{DateTime, Utc};

use crate::value_objects::{ChannelId, EventType, UserId};

/// One row of the reaction log
///
/// The issuer put (or took off) `reaction` on a message written by `target_id`.
/// Thread fields describe the thread root; they are empty when the message
/// could not be looked up at ingestion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    /// Ingestion time as written to the log
    pub timestamp: String,
    pub issuer_id: UserId,
    pub target_id: UserId,
    pub channel_id: ChannelId,
    pub reaction: String,
    pub event_type: EventType,
    pub thread_id: String,
    pub thread_author_id: Option<UserId>,
    pub target_message_text: String,
    /// Absent on rows logged before message ids were recorded
    pub target_message_id: Option<String>,
}

/// Identity of a logical reaction for replay protection
///
/// Legacy rows lack a message id and fall back to the message text. Edited
/// messages therefore yield a different key for the same logical message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    issuer_id: UserId,
    target_id: UserId,
    thread_id: String,
    message: String,
    reaction: String,
}

impl ReactionEvent {
    /// Create an event with empty thread and message information
    pub fn new(
        issuer_id: UserId,
        target_id: UserId,
        channel_id: ChannelId,
        reaction: impl Into<String>,
        event_type: EventType,
    ) -> Self {
        Self {
            timestamp: String::new(),
            issuer_id,
            target_id,
            channel_id,
            reaction: reaction.into(),
            event_type,
            thread_id: String::new(),
            thread_author_id: None,
            target_message_text: String::new(),
            target_message_id: None,
        }
    }

    /// Set the thread the reacted message belongs to
    pub fn with_thread(mut self, thread_id: impl Into<String>, author: Option<UserId>) -> Self {
        self.thread_id = thread_id.into();
        self.thread_author_id = author;
        self
    }

    /// Set the reacted message's text and (optional) id
    pub fn with_message(mut self, text: impl Into<String>, id: Option<String>) -> Self {
        self.target_message_text = text.into();
        self.target_message_id = id;
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Message id when recorded, message text otherwise
    pub fn message_identity(&self) -> &str {
        match self.target_message_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => &self.target_message_text,
        }
    }

    pub fn dedup_key(&self) -> DedupKey {
        DedupKey {
            issuer_id: self.issuer_id.clone(),
            target_id: self.target_id.clone(),
            thread_id: self.thread_id.clone(),
            message: self.message_identity().to_string(),
            reaction: self.reaction.clone(),
        }
    }

    /// Check if the issuer wrote the thread's root message
    #[inline]
    pub fn is_issued_by_thread_author(&self) -> bool {
        self.thread_author_id.as_ref() == Some(&self.issuer_id)
    }

    /// Parse the log timestamp, if it is RFC 3339
    pub fn logged_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.timestamp.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
