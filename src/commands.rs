//! Command handlers shared by the chat front ends.
//!
//! Every handler returns the reply text. Fetch and validation failures are
//! converted here and never reach the caller as errors.

use std::fmt::Write as _;

use crate::{
    transport::{HttpTransport, Transport},
    Account, Cluster, CommandError, Config, FetchError, LeagueEntry, Lookup, Platform, RiotId,
    StatsClient,
};

/// Match count used when the invocation does not give one.
pub const DEFAULT_MATCH_COUNT: u32 = 5;

const BUSY_REPLY: &str =
    "The stats service is rate limiting us right now. Please try again in a minute.";
const FAILURE_REPLY: &str = "Could not reach the stats service. Please try again later.";

#[derive(Clone, Debug)]
pub struct Commands<T = HttpTransport> {
    stats: StatsClient<T>,
    default_region: Platform,
}

impl Commands<HttpTransport> {
    pub fn new(config: &Config) -> Self {
        Self::with_stats(StatsClient::new(config), config.default_region)
    }
}

impl<T: Transport> Commands<T> {
    pub fn with_stats(stats: StatsClient<T>, default_region: Platform) -> Self {
        Self {
            stats,
            default_region,
        }
    }

    pub fn stats(&self) -> &StatsClient<T> {
        &self.stats
    }

    pub fn hello(&self) -> String {
        "Hello!".to_owned()
    }

    /// Ranked standings for `identifier` (`Name#Tag`) on `region`, or on the
    /// configured default platform.
    pub async fn rank(&self, identifier: &str, region: Option<&str>) -> String {
        match self.try_rank(identifier, region).await {
            Ok(reply) => reply,
            Err(err) => error_reply("rank", identifier, err),
        }
    }

    /// Recent match ids for `identifier`. `count` is clamped into `1..=20`.
    pub async fn matches(
        &self,
        identifier: &str,
        count: Option<u32>,
        cluster: Option<&str>,
    ) -> String {
        match self.try_matches(identifier, count, cluster).await {
            Ok(reply) => reply,
            Err(err) => error_reply("matches", identifier, err),
        }
    }

    async fn try_rank(
        &self,
        identifier: &str,
        region: Option<&str>,
    ) -> Result<String, CommandError> {
        let id = RiotId::parse(identifier)?;
        let platform = match region {
            Some(region) => region.parse::<Platform>()?,
            None => self.default_region,
        };

        let lookup = self
            .stats
            .account_by_riot_id(&id, platform.cluster())
            .await?;
        let Lookup::Found(account) = lookup else {
            return Ok(not_found_reply(&id));
        };
        let entries = self.stats.league_entries(&account.puuid, platform).await?;

        Ok(format_rank(&display_name(&account, &id), platform, &entries))
    }

    async fn try_matches(
        &self,
        identifier: &str,
        count: Option<u32>,
        cluster: Option<&str>,
    ) -> Result<String, CommandError> {
        let id = RiotId::parse(identifier)?;
        let cluster = match cluster {
            Some(cluster) => cluster.parse::<Cluster>()?,
            None => self.default_region.cluster(),
        };

        let Lookup::Found(account) = self.stats.account_by_riot_id(&id, cluster).await? else {
            return Ok(not_found_reply(&id));
        };
        let ids = self
            .stats
            .match_ids(&account.puuid, cluster, count.unwrap_or(DEFAULT_MATCH_COUNT))
            .await?;

        Ok(format_matches(&display_name(&account, &id), &ids))
    }
}

fn display_name(account: &Account, id: &RiotId) -> String {
    match (&account.game_name, &account.tag_line) {
        (Some(name), Some(tag)) => format!("{name}#{tag}"),
        _ => id.to_string(),
    }
}

fn not_found_reply(id: &RiotId) -> String {
    format!("No data found for {id}.")
}

fn format_rank(name: &str, platform: Platform, entries: &[LeagueEntry]) -> String {
    let mut reply = format!("{name} ({platform})");
    if entries.is_empty() {
        reply.push_str("\nUnranked");
        return reply;
    }
    for entry in entries {
        let division = if entry.rank.is_empty() {
            entry.tier.clone()
        } else {
            format!("{} {}", entry.tier, entry.rank)
        };
        let _ = write!(
            reply,
            "\n{}: {division}, {} LP, {}W/{}L",
            entry.queue_label(),
            entry.league_points,
            entry.wins,
            entry.losses
        );
        if let Some(rate) = entry.win_rate() {
            let _ = write!(reply, " ({rate}%)");
        }
    }
    reply
}

fn format_matches(name: &str, ids: &[String]) -> String {
    if ids.is_empty() {
        return format!("No recent matches for {name}.");
    }
    let mut reply = format!("Last {} matches for {name}:", ids.len());
    for id in ids {
        reply.push('\n');
        reply.push_str(id);
    }
    reply
}

/// Maps a handler failure to reply text; full detail goes to the log only.
fn error_reply(command: &str, identifier: &str, err: CommandError) -> String {
    match err {
        CommandError::Validation(err) => format!("Invalid input: {err}."),
        CommandError::Fetch(FetchError::RetryExhausted { attempts }) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(command, identifier, attempts, "rate limit budget exhausted");
            #[cfg(not(feature = "tracing"))]
            let _ = (command, identifier, attempts);
            BUSY_REPLY.to_owned()
        }
        CommandError::Fetch(err) => {
            #[cfg(feature = "tracing")]
            tracing::error!(command, identifier, error = %err, "stats request failed");
            #[cfg(not(feature = "tracing"))]
            let _ = (command, identifier, err);
            FAILURE_REPLY.to_owned()
        }
    }
}
