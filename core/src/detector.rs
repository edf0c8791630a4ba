/// The character that opens a mention context.
pub const MENTION_TRIGGER: char = '@';

/// Returns the in-progress mention query, if the buffer ends in one.
///
/// The query is everything after the *last* trigger character. Whitespace
/// anywhere in that tail means the token was finished (or never was one),
/// so no query is returned. `Some("")` means the context is open but the
/// user has not typed anything after the trigger yet; callers treat that
/// as "not yet meaningful" and keep the suggestion list closed.
pub fn detect_mention(text: &str) -> Option<String> {
    let at = text.rfind(MENTION_TRIGGER)?;
    let tail = &text[at + MENTION_TRIGGER.len_utf8()..];
    if tail.chars().any(char::is_whitespace) {
        return None;
    }
    Some(tail.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_trigger_means_no_query() {
        assert_eq!(detect_mention("hello world"), None);
        assert_eq!(detect_mention(""), None);
    }

    #[test]
    fn bare_trigger_opens_an_empty_query() {
        assert_eq!(detect_mention("@"), Some(String::new()));
        assert_eq!(detect_mention("hello @"), Some(String::new()));
    }

    #[test]
    fn tail_after_last_trigger_is_the_query() {
        assert_eq!(detect_mention("hello @ad"), Some("ad".to_string()));
        assert_eq!(detect_mention("@grace"), Some("grace".to_string()));
    }

    #[test]
    fn only_the_last_trigger_counts() {
        assert_eq!(detect_mention("a@b c @gr"), Some("gr".to_string()));
    }

    #[test]
    fn whitespace_in_tail_closes_the_context() {
        assert_eq!(detect_mention("@ada "), None);
        assert_eq!(detect_mention("@ada lovelace"), None);
        assert_eq!(detect_mention("@ada\n"), None);
        assert_eq!(detect_mention("@ada\u{a0}and"), None);
    }
}
