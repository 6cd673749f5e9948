//! Playlist-context handling for download URLs.
//!
//! A watch URL carrying a `list` query parameter belongs to a playlist
//! context but still addresses a single video; the context is stripped so
//! only that video is processed. A URL whose path is `/playlist`, or that
//! carries a `list` parameter with no single-video `v` parameter, is itself
//! a playlist and is downloaded as one.

use url::Url;

/// Query parameters that tie a single-video URL to a playlist context.
const CONTEXT_PARAMS: [&str; 3] = ["list", "index", "start_radio"];

/// Whether the URL addresses a playlist rather than a single video.
pub fn is_playlist_url(raw: &str) -> bool {
    let Ok(parsed) = Url::parse(raw) else {
        return false;
    };

    if parsed.path() == "/playlist" {
        return true;
    }

    let has_list = parsed.query_pairs().any(|(key, _)| key == "list");
    let has_video = parsed.query_pairs().any(|(key, _)| key == "v");
    has_list && !has_video
}

/// Strip playlist-context query parameters from a single-video URL.
/// Malformed URLs are returned unchanged; the engine reports them itself.
pub fn strip_playlist_context(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    let retained: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !CONTEXT_PARAMS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if retained.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(retained);
    }

    parsed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_path_is_playlist() {
        assert!(is_playlist_url(
            "https://www.youtube.com/playlist?list=PLx0sYbCqOb8TBPRdmBHs5Iftvv9TPboYG"
        ));
    }

    #[test]
    fn test_watch_url_with_list_is_not_a_playlist() {
        assert!(!is_playlist_url(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLx0sYbCqOb8TBPRdmBHs5Iftvv9TPboYG"
        ));
    }

    #[test]
    fn test_plain_watch_url_is_not_a_playlist() {
        assert!(!is_playlist_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(!is_playlist_url("not a url"));
    }

    #[test]
    fn test_strip_removes_playlist_context() {
        let stripped = strip_playlist_context(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLx0sYbCqOb8&index=4",
        );
        assert_eq!(stripped, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[test]
    fn test_strip_without_context_is_identity() {
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
        assert_eq!(strip_playlist_context(url), url);
    }

    #[test]
    fn test_strip_drops_query_entirely_when_only_context_remains() {
        let stripped = strip_playlist_context("https://www.youtube.com/feed?list=PLabc");
        assert_eq!(stripped, "https://www.youtube.com/feed");
    }

    #[test]
    fn test_strip_malformed_url_is_unchanged() {
        assert_eq!(strip_playlist_context("not a url"), "not a url");
    }
}
