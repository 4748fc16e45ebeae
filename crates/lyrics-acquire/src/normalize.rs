/// Label that marks where the lyrics proper begin.
pub const FIRST_SECTION_MARKER: &str = "[Verse 1]";

/// Drop page boilerplate ahead of the first `[Verse 1]` and trim.
///
/// Songs whose first section carries another label keep whatever precedes
/// it.
pub fn clean_lyrics(raw: &str) -> String {
    let body = match raw.find(FIRST_SECTION_MARKER) {
        Some(start) => &raw[start..],
        None => raw,
    };
    body.trim().to_string()
}
