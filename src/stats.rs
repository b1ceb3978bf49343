use std::fmt;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::{
    riot_id::is_dot_segment,
    transport::{HttpTransport, Transport},
    Account, Cluster, Config, FetchError, FetchOutcome, LeagueEntry, Lookup, Platform,
    RateLimitedFetcher, RequestDescriptor, Result, RiotId,
};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Riot-Token";

/// Largest match history page a command may ask for.
pub const MAX_MATCH_COUNT: u32 = 20;

/// Clamps a requested match count into `1..=MAX_MATCH_COUNT`.
pub fn clamp_match_count(count: u32) -> u32 {
    count.clamp(1, MAX_MATCH_COUNT)
}

/// Formats a routing value (platform or cluster) into its API host.
///
/// Example: `"americas"` → `"https://americas.api.riotgames.com"`
pub fn routing_base_url(routing: &str) -> String {
    format!("https://{routing}.api.riotgames.com")
}

/// Game-stats API client. Every call goes through the rate-limited fetcher.
#[derive(Clone)]
pub struct StatsClient<T = HttpTransport> {
    fetcher: RateLimitedFetcher<T>,
    api_key: String,
    api_base: Option<String>,
}

impl<T: fmt::Debug> fmt::Debug for StatsClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatsClient")
            .field("fetcher", &self.fetcher)
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl StatsClient<HttpTransport> {
    /// Creates a client over a fresh `reqwest` client.
    pub fn new(config: &Config) -> Self {
        Self::with_fetcher(config, RateLimitedFetcher::new())
    }
}

impl<T: Transport> StatsClient<T> {
    /// Creates a client over `fetcher`; its options are replaced by
    /// `config.fetch`.
    pub fn with_fetcher(config: &Config, fetcher: RateLimitedFetcher<T>) -> Self {
        Self {
            fetcher: fetcher.with_options(config.fetch.clone()),
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
        }
    }

    pub fn fetcher(&self) -> &RateLimitedFetcher<T> {
        &self.fetcher
    }

    /// Resolves a Riot ID to its account.
    pub async fn account_by_riot_id(
        &self,
        id: &RiotId,
        cluster: Cluster,
    ) -> Result<Lookup<Account>> {
        let request = self.request(
            cluster.as_str(),
            &[
                "riot",
                "account",
                "v1",
                "accounts",
                "by-riot-id",
                id.game_name.as_str(),
                id.tag_line.as_str(),
            ],
        )?;
        match self.fetcher.fetch(&request).await? {
            FetchOutcome::Success(body) => decode(body).map(Lookup::Found),
            FetchOutcome::NotFound => Ok(Lookup::NotFound),
        }
    }

    /// Ranked standings of a player; empty when the player is unranked or
    /// unknown on that platform.
    pub async fn league_entries(
        &self,
        puuid: &str,
        platform: Platform,
    ) -> Result<Vec<LeagueEntry>> {
        let request = self.request(
            platform.as_str(),
            &["lol", "league", "v4", "entries", "by-puuid", puuid],
        )?;
        self.fetch_list(&request).await
    }

    /// Most recent match ids, newest first. `count` is clamped into
    /// `1..=MAX_MATCH_COUNT`.
    pub async fn match_ids(
        &self,
        puuid: &str,
        cluster: Cluster,
        count: u32,
    ) -> Result<Vec<String>> {
        let request = self
            .request(
                cluster.as_str(),
                &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
            )?
            .query("count", clamp_match_count(count));
        self.fetch_list(&request).await
    }

    async fn fetch_list<D: DeserializeOwned>(&self, request: &RequestDescriptor) -> Result<Vec<D>> {
        match self.fetcher.fetch(request).await? {
            FetchOutcome::Success(body) => decode(body),
            FetchOutcome::NotFound => Ok(Vec::new()),
        }
    }

    fn request(&self, routing: &str, segments: &[&str]) -> Result<RequestDescriptor> {
        if let Some(segment) = segments.iter().find(|segment| is_dot_segment(segment)) {
            return Err(FetchError::InvalidUrl(format!(
                "path segment '{segment}' would be dropped"
            )));
        }
        let base = match &self.api_base {
            Some(base) => format!("{base}/{routing}"),
            None => routing_base_url(routing),
        };
        let mut url =
            Url::parse(&base).map_err(|err| FetchError::InvalidUrl(format!("{base}: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl(format!("{base}: cannot be a base")))?
            .pop_if_empty()
            .extend(segments);
        Ok(RequestDescriptor::get(url.as_str()).header(API_KEY_HEADER, self.api_key.as_str()))
    }
}

fn decode<D: DeserializeOwned>(body: serde_json::Value) -> Result<D> {
    serde_json::from_value(body)
        .map_err(|err| FetchError::Decode(format!("unexpected response shape: {err}")))
}
