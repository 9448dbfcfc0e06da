#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("record already exists ({status}): {body}")]
    Conflict { status: u16, body: String },
    #[error("request rejected ({status}): {body}")]
    Validation { status: u16, body: String },
    #[error("server error ({status}): {body}")]
    Server { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Coarse classification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    Conflict,
    Validation,
}

impl ApiError {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            409 => Self::Conflict { status, body },
            400 | 422 => Self::Validation { status, body },
            _ => Self::Server { status, body },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Transport(_) | Self::Server { .. } | Self::Decode(_) => ErrorKind::Transport,
        }
    }
}
