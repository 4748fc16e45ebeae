use lyrics_model::{LyricsError, NotFoundReason, SearchEnvelope, Section, SongPayload, SongResult};
use serde::Deserialize;

/// Pick the song to fetch out of a raw search response.
///
/// Takes the first section that is song-like and holds a song-like hit,
/// then that section's first song-like hit. Earlier sections of other
/// types (e.g. "top_hit" pointing at an artist) never win.
pub fn select_song(raw: serde_json::Value) -> Result<SongResult, LyricsError> {
    let envelope = SearchEnvelope::deserialize(&raw)
        .map_err(|e| LyricsError::Upstream(format!("Malformed search response: {e}")))?;

    let result = envelope
        .response
        .as_ref()
        .and_then(|body| body.sections.as_deref())
        .and_then(|sections| {
            sections
                .iter()
                .find(|s| s.is_song_like() && s.first_song_hit().is_some())
        })
        .and_then(Section::first_song_hit)
        .and_then(|hit| hit.result.as_ref());

    let Some(result) = result else {
        return Err(LyricsError::not_found(NotFoundReason::NoMatchingSong, raw));
    };

    let payload = SongPayload::deserialize(result)
        .map_err(|e| LyricsError::Upstream(format!("Malformed song result: {e}")))?;

    let Some(url) = payload.url.filter(|u| !u.is_empty()) else {
        return Err(LyricsError::not_found(NotFoundReason::MissingUrl, raw));
    };

    Ok(SongResult {
        artist: payload.artist_names,
        title: payload.title,
        url,
        image: payload.header_image_url,
        api_path: payload.api_path,
    })
}
