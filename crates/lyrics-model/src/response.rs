use serde::Serialize;

/// Song metadata resolved from a search hit. Lives for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct SongResult {
    pub artist: Option<serde_json::Value>,
    pub title: Option<serde_json::Value>,
    /// Canonical song page. Always present; resolution fails without it.
    pub url: String,
    pub image: Option<serde_json::Value>,
    /// Upstream API path, e.g. `/songs/378195`.
    pub api_path: Option<String>,
}

impl SongResult {
    /// Numeric song id: the final `/`-separated segment of the API path.
    pub fn song_id(&self) -> Option<&str> {
        self.api_path.as_deref()?.rsplit('/').next()
    }
}

/// Successful lookup payload, as served by `/api/lyrics`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LyricsResponse {
    pub status: u16,
    pub success: bool,
    pub result: LyricsResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LyricsResult {
    pub title: Option<serde_json::Value>,
    pub artist: Option<serde_json::Value>,
    pub link: String,
    pub image: Option<serde_json::Value>,
    pub lyrics: String,
}

impl LyricsResponse {
    /// Assemble the success payload from a resolved song and its cleaned lyrics.
    pub fn success(song: SongResult, lyrics: String) -> Self {
        Self {
            status: 200,
            success: true,
            result: LyricsResult {
                title: song.title,
                artist: song.artist,
                link: song.url,
                image: song.image,
                lyrics,
            },
        }
    }
}

/// Error body. `details` is omitted when there is nothing to add.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_song() -> SongResult {
        SongResult {
            artist: Some(serde_json::json!("MIIA")),
            title: Some(serde_json::json!("Dynasty")),
            url: "https://genius.com/Miia-dynasty-lyrics".to_string(),
            image: Some(serde_json::json!("https://images.genius.com/cover.jpg")),
            api_path: Some("/songs/3854326".to_string()),
        }
    }

    #[test]
    fn test_song_id_from_api_path() {
        assert_eq!(sample_song().song_id(), Some("3854326"));

        let mut song = sample_song();
        song.api_path = None;
        assert_eq!(song.song_id(), None);
    }

    #[test]
    fn test_success_shape() {
        let response = LyricsResponse::success(sample_song(), "[Verse 1]\nLine".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["success"], true);
        assert_eq!(json["result"]["title"], "Dynasty");
        assert_eq!(json["result"]["artist"], "MIIA");
        assert_eq!(json["result"]["link"], "https://genius.com/Miia-dynasty-lyrics");
        assert_eq!(json["result"]["image"], "https://images.genius.com/cover.jpg");
        assert_eq!(json["result"]["lyrics"], "[Verse 1]\nLine");
    }

    #[test]
    fn test_error_body_omits_empty_details() {
        let body = ErrorBody { error: "nope".to_string(), details: None };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"error":"nope"}"#);
    }
}
