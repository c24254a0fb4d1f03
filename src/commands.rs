//! Trigger names and invocation-line parsing.

pub const COMMAND_TRIGGER_DANMAKU: &str = "danmaku";

/// First whitespace-separated field of the raw invocation line, with any
/// leading `/` stripped.
pub fn extract_trigger(raw: &str) -> &str {
    raw.split_whitespace()
        .next()
        .unwrap_or("")
        .trim_start_matches('/')
}

/// Everything after the trigger token, rejoined with single spaces.
///
/// Whitespace runs collapse to one separator and leading/trailing whitespace
/// is dropped. Returns the empty string when nothing follows the trigger.
/// Quoting and escaping are not supported.
pub fn extract_content(raw: &str) -> String {
    raw.split_whitespace().skip(1).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_is_first_field_without_slash() {
        assert_eq!(extract_trigger("/danmaku hello"), "danmaku");
        assert_eq!(extract_trigger("/danmaku"), "danmaku");
        assert_eq!(extract_trigger("  /danmaku  x"), "danmaku");
        assert_eq!(extract_trigger(""), "");
    }

    #[test]
    fn content_is_empty_without_trailing_text() {
        assert_eq!(extract_content("/danmaku"), "");
        assert_eq!(extract_content("/danmaku    "), "");
        assert_eq!(extract_content("/danmaku \t \n"), "");
    }

    #[test]
    fn content_collapses_whitespace_runs() {
        assert_eq!(extract_content("/danmaku   a   b"), "a b");
        assert_eq!(
            extract_content("/danmaku \t one\t two  three "),
            "one two three"
        );
    }

    #[test]
    fn content_keeps_single_spaced_text_as_is() {
        assert_eq!(extract_content("/danmaku hello world"), "hello world");
    }
}
