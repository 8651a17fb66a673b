pub type LeagueResult<T> = Result<T, LeagueError>;

#[derive(thiserror::Error, Debug)]
pub enum LeagueError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LeagueError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
