use thiserror::Error;

/// Message returned when the caller omits the `q` parameter.
pub const MISSING_QUERY_MESSAGE: &str = "Please provide a search query with the \"q\" parameter";

/// Failures that end a lookup early.
///
/// The server maps each variant to an HTTP status; the count-view ping never
/// produces one of these.
#[derive(Debug, Error)]
pub enum LyricsError {
    #[error("{}", MISSING_QUERY_MESSAGE)]
    InvalidRequest,

    /// Upstream answered, but not with anything usable. `details` is the raw
    /// search payload, echoed back to the caller for diagnosis.
    #[error("{reason}")]
    NotFound {
        reason: NotFoundReason,
        details: serde_json::Value,
    },

    #[error("{0}")]
    Upstream(String),

    #[error("request to {url} timed out")]
    Timeout { url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// No song- or lyric-typed hit in any song- or lyric-typed section.
    NoMatchingSong,
    /// The matched song carries no page URL.
    MissingUrl,
}

impl NotFoundReason {
    pub fn message(self) -> &'static str {
        match self {
            NotFoundReason::NoMatchingSong => "No song found matching your query",
            NotFoundReason::MissingUrl => "Couldn't find lyrics URL for this song",
        }
    }
}

impl std::fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl LyricsError {
    pub fn not_found(reason: NotFoundReason, details: serde_json::Value) -> Self {
        LyricsError::NotFound { reason, details }
    }
}
