use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Unknown weekday `{0}` in class rule")]
    UnknownWeekday(String),
}

pub type SiteResult<T> = Result<T, SiteError>;
