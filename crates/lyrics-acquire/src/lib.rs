use lyrics_model::{LyricsError, LyricsResponse, SearchQuery, SongResult};

pub mod extract;
pub mod genius;
pub mod normalize;
pub mod resolve;

pub use genius::GeniusClient;

/// Look up a song by free-text query and return its cleaned lyrics.
///
/// Search, resolve, fetch the page, extract, clean. The view-count ping runs
/// alongside the page fetch and cannot fail the lookup.
#[tracing::instrument(skip_all, fields(query = %query))]
pub async fn lookup(
    client: &GeniusClient,
    query: &SearchQuery,
) -> Result<LyricsResponse, LyricsError> {
    let raw = client.search(query).await?;
    let song = resolve::select_song(raw)?;
    tracing::info!(
        title = ?song.title,
        artist = ?song.artist,
        url = %song.url,
        "Resolved song"
    );

    let ((), html) = tokio::join!(record_view(client, &song), client.fetch_page(&song.url));
    let html = html?;

    let raw_lyrics = extract::extract_lyrics(&html);
    let lyrics = normalize::clean_lyrics(&raw_lyrics);
    tracing::info!(lines = lyrics.lines().count(), "Extracted lyrics");

    Ok(LyricsResponse::success(song, lyrics))
}

/// Best-effort view ping. Failures are logged here and go no further.
async fn record_view(client: &GeniusClient, song: &SongResult) {
    let Some(song_id) = song.song_id() else {
        tracing::warn!(url = %song.url, "No api_path on song; skipping view count");
        return;
    };

    if let Err(e) = client.count_view(song_id, &song.url).await {
        tracing::warn!(song_id, err = ?e, "View count failed (non-critical)");
    }
}
