/// Error type returned by the fetch layer.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The upstream kept answering 429 until the attempt budget ran out.
    #[error("rate limited after {attempts} attempts")]
    RetryExhausted {
        /// Number of requests issued, including the first one.
        attempts: usize,
    },
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success HTTP status code other than 404 and 429, with raw body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// The request URL could not be assembled.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// Success status with a body that is not valid JSON, or JSON of the
    /// wrong shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Returns `true` for the failures reported as a generic upstream error:
    /// unexpected status, network failure, bad URL or an undecodable body.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::RetryExhausted { .. })
    }
}

/// Malformed user input, rejected before any request is issued.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expected a Riot ID in the form Name#Tag")]
    MissingSeparator,
    #[error("the name part of the Riot ID is empty")]
    EmptyName,
    #[error("the tag part of the Riot ID is empty")]
    EmptyTag,
    #[error("'{0}' is not a valid name or tag")]
    DotSegment(String),
    #[error("unknown region '{0}'")]
    UnknownRegion(String),
    #[error("unknown cluster '{0}'")]
    UnknownCluster(String),
}

/// Startup configuration failure. Fatal for the process.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing {0} environment variable")]
    Missing(&'static str),
    #[error("{0} is set but empty")]
    Empty(&'static str),
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failure inside a command handler before it is turned into reply text.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
