//! Value objects - immutable types that represent domain concepts

mod event_type;
mod ids;

pub use event_type::{EventType, EventTypeParseError};
pub use ids::{ChannelId, IdParseError, UserId};
