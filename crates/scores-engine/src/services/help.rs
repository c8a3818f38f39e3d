//! `!help` reply describing a channel's scoring rules

use scores_core::{ChannelConfig, ChannelDescriptor, DomainResult, UserLookup};

const INTRO: &str = "Hello ! I am a bot having the goal to take note of scores when questions are asked on this channel.
My work aims at looking at some interactions and react depending on these.
*Note*: _I look for interactions only once I am invited on the channel._

Following observed interactions are configured on this channel :
";

const SETUP_USAGE: &str = "- `!setup <configuration name>` : Initializes channel configuration into the spreadsheet. `<configuration name>` is a name that will be used for spreadsheet tabs.\n";

/// Reply for a channel that has no configuration row yet
pub fn setup_hint() -> &'static str {
    "It appears this channel has not be configured yet.
To initialize it, you can type `!setup <configuration name>`, it will initialize channel configuration into the spreadsheet. `<configuration name>` is a name that will be used for spreadsheet tabs."
}

/// Who may grant points under `config`
fn allowed_issuers<L>(config: &ChannelConfig, users: &L) -> DomainResult<String>
where
    L: UserLookup + ?Sized,
{
    let admin_name = config
        .admin_user_id
        .as_ref()
        .map(|id| users.resolve(id).map(|user| user.name.as_str()))
        .transpose()?;

    Ok(
        match (admin_name, config.restrict_reactions_to_thread_authors) {
            (Some(name), true) => {
                format!("by this channel admin ({name}) or question thread author")
            }
            (Some(name), false) => format!("by this channel admin ({name})"),
            (None, true) => "by question thread author".to_string(),
            (None, false) => "by anyone on this channel".to_string(),
        },
    )
}

/// Render the help text for a configured channel
///
/// Fails when the configured admin is missing from the directory.
pub fn render_help<L>(descriptor: &ChannelDescriptor, users: &L) -> DomainResult<String>
where
    L: UserLookup + ?Sized,
{
    let who = allowed_issuers(&descriptor.config, users)?;
    let mut message = String::from(INTRO);

    for (reaction, rule) in descriptor.config.reaction_rules.iter() {
        let points = rule.score_increment;
        let plural = if points > 1 { "s" } else { "" };
        message.push_str(&format!(
            "- When reaction :{reaction}: is set {who} : adding {points} point{plural} for target message's author receving the reaction\n"
        ));
    }

    let scores_link = descriptor
        .leaderboard_link
        .as_deref()
        .map(|link| format!(" Complete leaderboard is available here {link}."))
        .unwrap_or_default();

    message.push_str("\nFollowing commands are available :\n- `!help` : Shows help\n");
    message.push_str(&format!(
        "- `!scores` : Show podium (scores total) for this channel.{scores_link}\n"
    ));
    message.push_str("- `!update-users` : Refreshes this slack server's users list (when a username changes, or new users are added on Slack)\n");
    message.push_str(SETUP_USAGE);

    Ok(message)
}
