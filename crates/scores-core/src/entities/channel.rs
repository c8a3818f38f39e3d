//! Channel scoring configuration
//!
//! Stored as JSON next to each channel, for example:
//!
//! ```json
//! {
//!   "adminUser": "U5PQJFM9C",
//!   "restrictReactionsToThreadAuthors": true,
//!   "reactionsConfigs": {
//!     "heavy_check_mark": { "scoreIncrement": 1 },
//!     "trophy": { "scoreIncrement": 10 }
//!   }
//! }
//! ```
//!
//! The order of `reactionsConfigs` keys is kept: it drives leaderboard
//! columns and the help text.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use validator::{Validate, ValidationErrors};

use crate::error::{DomainError, DomainResult};
use crate::value_objects::{ChannelId, UserId};

/// Points granted by one reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRule {
    #[validate(range(min = 1, message = "scoreIncrement must be a positive integer"))]
    #[serde(deserialize_with = "integral_number")]
    pub score_increment: i64,
}

/// Integer, or a float with no fractional part (`2.0` reads as `2`)
fn integral_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct IntegralVisitor;

    impl Visitor<'_> for IntegralVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<i64, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(|_| E::custom(format_args!("{value} is out of range")))
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        fn visit_f64<E>(self, value: f64) -> Result<i64, E>
        where
            E: de::Error,
        {
            if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
                return Err(E::custom(format_args!("{value} is not an integer")));
            }
            Ok(value as i64)
        }
    }

    deserializer.deserialize_any(IntegralVisitor)
}

impl ReactionRule {
    pub fn new(score_increment: i64) -> Self {
        Self { score_increment }
    }
}

/// Reaction name to rule, in configuration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionRules(Vec<(String, ReactionRule)>);

impl ReactionRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule for a reaction, keeping its position if already present
    pub fn set(&mut self, reaction: impl Into<String>, rule: ReactionRule) {
        let reaction = reaction.into();
        match self.0.iter_mut().find(|(name, _)| *name == reaction) {
            Some((_, existing)) => *existing = rule,
            None => self.0.push((reaction, rule)),
        }
    }

    /// Builder-style variant of [`ReactionRules::set`]
    pub fn with(mut self, reaction: impl Into<String>, score_increment: i64) -> Self {
        self.set(reaction, ReactionRule::new(score_increment));
        self
    }

    pub fn get(&self, reaction: &str) -> Option<&ReactionRule> {
        self.0
            .iter()
            .find(|(name, _)| name == reaction)
            .map(|(_, rule)| rule)
    }

    /// Reaction names in configuration order
    pub fn reactions(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReactionRule)> {
        self.0.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ReactionRules {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (reaction, rule) in &self.0 {
            map.serialize_entry(reaction, rule)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ReactionRules {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RulesVisitor;

        impl<'de> Visitor<'de> for RulesVisitor {
            type Value = ReactionRules;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of reaction name to {\"scoreIncrement\": <integer>}")
            }

            fn visit_map<A>(self, mut access: A) -> Result<ReactionRules, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rules = ReactionRules::new();
                while let Some((reaction, rule)) = access.next_entry::<String, ReactionRule>()? {
                    if rules.get(&reaction).is_some() {
                        return Err(de::Error::custom(format_args!(
                            "duplicate reaction {reaction:?}"
                        )));
                    }
                    rules.0.push((reaction, rule));
                }
                Ok(rules)
            }
        }

        deserializer.deserialize_map(RulesVisitor)
    }
}

/// Scoring rules for one channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// User whose reactions always count
    #[serde(
        rename = "adminUser",
        alias = "adminUserId",
        default,
        deserialize_with = "deserialize_admin",
        skip_serializing_if = "Option::is_none"
    )]
    pub admin_user_id: Option<UserId>,

    /// Only the thread's root author may grant points (besides the admin)
    #[serde(rename = "restrictReactionsToThreadAuthors")]
    pub restrict_reactions_to_thread_authors: bool,

    #[serde(rename = "reactionsConfigs", alias = "reactionRules")]
    pub reaction_rules: ReactionRules,
}

// An empty admin string in stored JSON means "no admin".
fn deserialize_admin<'de, D>(deserializer: D) -> Result<Option<UserId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(|id| UserId::parse(id).ok()))
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| errors.to_string())
}

impl ChannelConfig {
    /// Configuration written when a channel is set up
    pub fn default_for_admin(admin: UserId) -> Self {
        Self {
            admin_user_id: Some(admin),
            restrict_reactions_to_thread_authors: true,
            reaction_rules: ReactionRules::new()
                .with("white_check_mark", 2)
                .with("lock", 1),
        }
    }

    /// Parse and validate stored configuration JSON
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidChannelConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self).map_err(|e| DomainError::InvalidChannelConfig(e.to_string()))
    }

    /// Check every rule's increment
    pub fn validate(&self) -> DomainResult<()> {
        for (reaction, rule) in self.reaction_rules.iter() {
            rule.validate()
                .map_err(|errors| DomainError::InvalidReactionRule {
                    reaction: reaction.to_string(),
                    reason: first_message(&errors),
                })?;
        }
        Ok(())
    }

    #[inline]
    pub fn is_admin(&self, user_id: &UserId) -> bool {
        self.admin_user_id.as_ref() == Some(user_id)
    }

    pub fn rule_for(&self, reaction: &str) -> Option<&ReactionRule> {
        self.reaction_rules.get(reaction)
    }
}

/// One row of the channel configuration table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDescriptor {
    pub channel_id: ChannelId,
    /// Basename for the channel's score sheets
    pub sheet_name: String,
    pub config: ChannelConfig,
    /// Public link to the complete leaderboard
    pub leaderboard_link: Option<String>,
}

impl ChannelDescriptor {
    /// Name of the sheet holding the channel's reaction log
    pub fn reaction_sheet_name(&self) -> String {
        format!("{}-ReactionsLog", self.sheet_name)
    }
}
