//! Error types for the portfolio terminal.

/// Errors surfaced to callers of the terminal engine.
///
/// Unknown commands and malformed content never show up here: both are
/// rendered into the output history instead.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("terminal busy: `{running}` is still running")]
    Busy { running: String },

    #[error("terminal has been torn down")]
    TornDown,

    #[error("content error: {0}")]
    Content(serde_json::Error),

    #[error("config error: {0}")]
    Config(serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PortfolioError>;
