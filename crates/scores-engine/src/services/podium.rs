//! Podium rendering for the `!scores` reply

use std::fmt;

use scores_core::{ChannelDescriptor, Leaderboard};

/// Lowest rank shown on the podium
pub const PODIUM_DEPTH: u32 = 3;

const MEDALS: [&str; PODIUM_DEPTH as usize] = [
    ":first_place_medal:",
    ":second_place_medal:",
    ":third_place_medal:",
];

/// Users sharing one podium rank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodiumPlace {
    pub rank: u32,
    pub score: i64,
    /// Names in leaderboard order
    pub names: Vec<String>,
}

impl PodiumPlace {
    fn medal(&self) -> &'static str {
        usize::try_from(self.rank)
            .ok()
            .and_then(|rank| rank.checked_sub(1))
            .and_then(|index| MEDALS.get(index))
            .copied()
            .unwrap_or_default()
    }
}

/// Top three ranks of a leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Podium {
    pub places: Vec<PodiumPlace>,
}

impl Podium {
    /// Group the top ranks, `None` when nobody has scored
    pub fn from_leaderboard(leaderboard: &Leaderboard) -> Option<Self> {
        let mut places: Vec<PodiumPlace> = Vec::new();

        for row in leaderboard.top(PODIUM_DEPTH) {
            match places.last_mut() {
                Some(place) if place.rank == row.rank => place.names.push(row.name.clone()),
                _ => places.push(PodiumPlace {
                    rank: row.rank,
                    score: row.total_score,
                    names: vec![row.name.clone()],
                }),
            }
        }

        if places.is_empty() {
            None
        } else {
            Some(Self { places })
        }
    }

    /// Podium line followed by the complete leaderboard link, when known
    pub fn reply(&self, leaderboard_link: Option<&str>) -> String {
        match leaderboard_link {
            Some(link) => format!("{self}\n_Complete leaderboard is available here : {link} _"),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for Podium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*Leaderboard*:")?;
        for place in &self.places {
            write!(
                f,
                " {} {} ({} pts)",
                place.medal(),
                place.names.join(", "),
                place.score
            )?;
        }
        Ok(())
    }
}

/// Text answering `!scores` for a channel
pub fn scores_reply(leaderboard: &Leaderboard, descriptor: &ChannelDescriptor) -> String {
    match Podium::from_leaderboard(leaderboard) {
        Some(podium) => podium.reply(descriptor.leaderboard_link.as_deref()),
        None => format!(
            "No score available yet in spreadsheet's sheet named [{}] corresponding to channel [{}] !",
            descriptor.sheet_name, descriptor.channel_id
        ),
    }
}
