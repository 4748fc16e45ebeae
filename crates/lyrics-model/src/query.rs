use crate::error::LyricsError;

/// A caller-supplied search term. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate the raw `q` parameter.
    ///
    /// Absent and empty values are rejected. Anything else, whitespace
    /// included, is passed to upstream untouched.
    pub fn parse(raw: Option<&str>) -> Result<Self, LyricsError> {
        match raw {
            Some(q) if !q.is_empty() => Ok(Self(q.to_string())),
            _ => Err(LyricsError::InvalidRequest),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
