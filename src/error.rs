use thiserror::Error;

/// Everything that can end a command early. Each variant maps to one line
/// of user-facing text via `Display`; `main` prints it and exits with 1.
#[derive(Debug, Error)]
pub enum ClawError {
    /// An authenticated call was attempted without a stored API key.
    #[error("Error: No API key found. Please register first.")]
    MissingToken,

    /// The server answered with a non-success status.
    #[error("HTTP Error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body was not JSON.
    #[error("Error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClawError>;
