use serde::Deserialize;

/// Section and hit types that can carry a song.
pub const SONG_TYPES: [&str; 2] = ["song", "lyric"];

/// Top level of a `/api/search/multi` response.
///
/// Every level is optional: upstream omits pieces freely and a missing link
/// means "no song", not a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEnvelope {
    pub response: Option<SearchBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchBody {
    pub sections: Option<Vec<Section>>,
}

/// A category of results (e.g. "top_hit", "song", "lyric", "artist").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub hits: Option<Vec<Hit>>,
}

/// One search hit. `result` stays untyped because its shape depends on
/// `kind`; only song-like hits are decoded into [`SongPayload`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hit {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub result: Option<serde_json::Value>,
}

/// The fields of a song result this service reads.
///
/// Display fields are echoed to the caller as upstream sent them, whatever
/// their JSON type; only `url` and `api_path` are used as strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SongPayload {
    pub artist_names: Option<serde_json::Value>,
    pub title: Option<serde_json::Value>,
    pub url: Option<String>,
    pub header_image_url: Option<serde_json::Value>,
    pub api_path: Option<String>,
}

impl Section {
    pub fn is_song_like(&self) -> bool {
        is_song_type(self.kind.as_deref())
    }

    /// First hit in this section whose own type is song-like.
    pub fn first_song_hit(&self) -> Option<&Hit> {
        self.hits.as_deref()?.iter().find(|hit| hit.is_song_like())
    }
}

impl Hit {
    pub fn is_song_like(&self) -> bool {
        is_song_type(self.kind.as_deref())
    }
}

fn is_song_type(kind: Option<&str>) -> bool {
    kind.is_some_and(|k| SONG_TYPES.contains(&k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_sparse_envelope() {
        let env: SearchEnvelope = serde_json::from_str(r#"{"meta":{"status":200}}"#).unwrap();
        assert!(env.response.is_none());

        let env: SearchEnvelope = serde_json::from_str(r#"{"response":{}}"#).unwrap();
        assert!(env.response.unwrap().sections.is_none());
    }

    #[test]
    fn test_first_song_hit_skips_other_types() {
        let section: Section = serde_json::from_value(serde_json::json!({
            "type": "song",
            "hits": [
                {"type": "artist", "result": {"name": "Someone"}},
                {"type": "song", "result": {"title": "Wanted"}},
                {"type": "song", "result": {"title": "Second"}}
            ]
        }))
        .unwrap();

        assert!(section.is_song_like());
        let hit = section.first_song_hit().unwrap();
        assert_eq!(hit.result.as_ref().unwrap()["title"], "Wanted");
    }

    #[test]
    fn test_untyped_section_is_not_song_like() {
        let section = Section::default();
        assert!(!section.is_song_like());
        assert!(section.first_song_hit().is_none());
    }
}
