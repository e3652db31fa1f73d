use thiserror::Error;

/// Failures while talking to the GitHub API.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("github request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid github api url: {0}")]
    Url(#[from] url::ParseError),
}

/// Failures raised by the strict selectors.
#[derive(Error, Debug, PartialEq)]
pub enum SelectError {
    #[error("no deployments found in history")]
    EmptyHistory,

    #[error("the most recent deployment has no id")]
    MissingId,

    #[error("no statuses found for the most recent deployment id [{id}]")]
    NoStatuses { id: i64 },

    #[error("the most recent status for deployment id [{id}] is '{found}'")]
    StateMismatch { id: i64, found: String },
}
