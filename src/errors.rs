#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("failed to reach provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed provider response: {0}")]
    Malformed(String),
}
