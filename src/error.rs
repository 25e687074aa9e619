use subdiv::SubdivError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Subdiv(#[from] SubdivError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Subdiv(e) => e.code(),
            Error::Io(_) => "io",
            Error::Json(_) => "json",
            Error::UnknownTheme(_) => "unknown_theme",
            Error::InvalidConfig(_) => "invalid_config",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
