use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use lyrics_acquire::GeniusClient;
use lyrics_model::{LyricsError, LyricsResponse, SearchQuery};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{ApiError, PrettyJson};

const INDEX_PAGE: &str = r#"<h1>Genius.com Lyrics API</h1>
<p>Use the <code>/api/lyrics?q=SONG_NAME</code> endpoint to search for lyrics</p>
<p>Example: <a href="/api/lyrics?q=Dynasty MIIA">Tap Here</a></p>
"#;

/// Shared per-process state. Holds no mutable data.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: GeniusClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, LyricsError> {
        let client = GeniusClient::new(&config.genius_base_url, config.request_timeout)?;
        Ok(Self { client })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/lyrics", get(lyrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn lyrics(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<PrettyJson<LyricsResponse>, ApiError> {
    let query = SearchQuery::parse(params.get("q").map(String::as_str))?;
    let response = lyrics_acquire::lookup(&state.client, &query).await?;
    Ok(PrettyJson(StatusCode::OK, response))
}
