use scraper::{Html, Node, Selector};

/// Direct children of the lyrics root that hold a slice of the lyrics.
const LYRICS_CONTAINER: &str = r#"#lyrics-root > div[data-lyrics-container="true"]"#;

/// Extract the raw lyrics text from a song page.
///
/// Each container becomes one block: `<br>` turns into a newline, every
/// other tag is dropped but its text kept. Non-empty blocks are trimmed and
/// each is followed by a blank line.
pub fn extract_lyrics(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse(LYRICS_CONTAINER).expect("valid selector");

    let mut lyrics = String::new();
    let mut containers = 0;

    for container in document.select(&selector) {
        containers += 1;

        let mut block = String::new();
        collect_text(*container, &mut block);

        let block = block.trim();
        if !block.is_empty() {
            lyrics.push_str(block);
            lyrics.push_str("\n\n");
        }
    }

    if containers == 0 {
        tracing::warn!("No lyrics containers found on page");
    }
    tracing::debug!(containers, chars = lyrics.len(), "Extracted lyrics text");

    lyrics
}

/// Append the text under `node`, with `<br>` rendered as a newline.
fn collect_text(node: ego_tree::NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(elem) if elem.name() == "br" => out.push('\n'),
            Node::Element(_) => collect_text(child, out),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_containers_in_order() {
        let html = r#"
        <html><body>
        <div id="lyrics-root">
            <div data-lyrics-container="true">
                [Verse 1]<br>First line<br><a href="/annotation"><span>Second</span> line</a>
            </div>
            <div class="ad">Advertisement</div>
            <div data-lyrics-container="true"><i>[Chorus]</i><br/>Sing it &amp; shout</div>
        </div>
        </body></html>
        "#;

        assert_eq!(
            extract_lyrics(html),
            "[Verse 1]\nFirst line\nSecond line\n\n[Chorus]\nSing it & shout\n\n"
        );
    }

    #[test]
    fn test_ignores_containers_outside_root() {
        let html = r#"
        <html><body>
        <div data-lyrics-container="true">Stray</div>
        <div id="lyrics-root">
            <section><div data-lyrics-container="true">Nested too deep</div></section>
            <div data-lyrics-container="false">Not lyrics</div>
            <div data-lyrics-container="true">Kept</div>
        </div>
        </body></html>
        "#;

        assert_eq!(extract_lyrics(html), "Kept\n\n");
    }

    #[test]
    fn test_empty_containers_add_nothing() {
        let html = r#"
        <div id="lyrics-root">
            <div data-lyrics-container="true">  <br>  </div>
            <div data-lyrics-container="true">Only verse</div>
        </div>
        "#;

        assert_eq!(extract_lyrics(html), "Only verse\n\n");
    }

    #[test]
    fn test_page_without_lyrics() {
        assert_eq!(extract_lyrics("<html><body><p>Nothing here</p></body></html>"), "");
    }
}
