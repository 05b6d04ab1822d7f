pub type PolycycleResult<T> = Result<T, PolycycleError>;

#[derive(thiserror::Error, Debug)]
pub enum PolycycleError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("vertex budget error: {0}")]
    Budget(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PolycycleError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn budget(msg: impl Into<String>) -> Self {
        Self::Budget(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
