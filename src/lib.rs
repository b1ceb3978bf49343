//! `rankrelay` fetches player rank and match data from the game-stats API
//! and formats it as chat reply text.
//!
//! The core is [`RateLimitedFetcher::fetch`], which retries only on HTTP 429,
//! honoring the server's `Retry-After` hint for at most
//! [`FetchOptions::MAX_ATTEMPTS`] requests. On top of it:
//! - [`StatsClient`] builds the account, league and match requests
//! - [`Commands`] turns invocations into reply text

mod commands;
mod config;
mod error;
mod fetcher;
mod options;
mod region;
mod request;
mod riot_id;
mod stats;
mod types;

pub mod transport;

pub use commands::{Commands, DEFAULT_MATCH_COUNT};
pub use config::Config;
pub use error::{CommandError, ConfigError, FetchError, ValidationError};
pub use fetcher::{parse_retry_after, FetchOutcome, RateLimitedFetcher, LONG_RETRY_AFTER};
pub use options::FetchOptions;
pub use region::{Cluster, Platform};
pub use request::RequestDescriptor;
pub use riot_id::RiotId;
pub use stats::{clamp_match_count, routing_base_url, StatsClient, API_KEY_HEADER, MAX_MATCH_COUNT};
pub use types::{Account, LeagueEntry, Lookup};

pub type Result<T> = std::result::Result<T, FetchError>;
