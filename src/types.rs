use serde::Deserialize;

/// Result of a lookup that may legitimately find nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub puuid: String,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
}

/// One ranked queue standing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub queue_type: String,
    pub tier: String,
    /// Division within the tier (`I` to `IV`); empty for apex tiers.
    #[serde(default)]
    pub rank: String,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
}

impl LeagueEntry {
    /// Win rate in whole percent, `None` before the first game.
    pub fn win_rate(&self) -> Option<u32> {
        let games = self.wins + self.losses;
        (games > 0).then(|| (self.wins * 100 + games / 2) / games)
    }

    /// Human-readable queue label.
    pub fn queue_label(&self) -> &str {
        match self.queue_type.as_str() {
            "RANKED_SOLO_5x5" => "Solo/Duo",
            "RANKED_FLEX_SR" => "Flex",
            "RANKED_TFT_DOUBLE_UP" => "Double Up",
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Account, LeagueEntry};

    #[test]
    fn account_decodes_camel_case_fields() {
        let account: Account = serde_json::from_value(json!({
            "puuid": "abc",
            "gameName": "Player",
            "tagLine": "NA1"
        }))
        .expect("account must decode");
        assert_eq!(account.puuid, "abc");
        assert_eq!(account.game_name.as_deref(), Some("Player"));
    }

    #[test]
    fn win_rate_rounds_and_handles_no_games() {
        let mut entry: LeagueEntry = serde_json::from_value(json!({
            "queueType": "RANKED_SOLO_5x5",
            "tier": "GOLD",
            "rank": "II",
            "leaguePoints": 40,
            "wins": 2,
            "losses": 1
        }))
        .expect("entry must decode");
        assert_eq!(entry.win_rate(), Some(67));
        assert_eq!(entry.queue_label(), "Solo/Duo");

        entry.wins = 0;
        entry.losses = 0;
        assert_eq!(entry.win_rate(), None);
    }
}
