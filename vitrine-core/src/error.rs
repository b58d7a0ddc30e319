use thiserror::Error;

/// Errors originating from the core presentation model.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed {pack} content: {source}")]
    Content {
        /// Which embedded pack failed to parse ("portfolio" or "park").
        pack: &'static str,
        source: serde_json::Error,
    },

    #[error("unknown screen: {0:?} (expected \"portfolio\" or \"park\")")]
    UnknownScreen(String),

    #[error("unknown theme: {0:?} (expected \"dark\" or \"light\")")]
    UnknownTheme(String),
}
