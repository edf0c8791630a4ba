//! Builds and reads the markup form of the input.
//!
//! The markup dialect is a plain string with committed mentions wrapped in
//! `<span style="...">@First Last</span>`. Hosts that persist the styled
//! form round-trip through [`parse_mention_markup`].

use std::ops::Range;

use crate::detector::MENTION_TRIGGER;

/// Style directive applied to a chip when the host does not supply one.
pub const DEFAULT_MENTION_STYLE: &str = "color: #117AA7;";

/// Non-breaking space appended after a chip that ends the buffer, so the
/// caret has a plain-text insertion point to land on.
pub const MENTION_SPACER: char = '\u{a0}';

const SPAN_OPEN_PREFIX: &str = "<span style=\"";
const SPAN_CLOSE: &str = "</span>";

/// Renders one committed mention as a styled chip token.
pub fn styled_mention_token(display_name: &str, style: &str) -> String {
    format!("{SPAN_OPEN_PREFIX}{style}\">{MENTION_TRIGGER}{display_name}{SPAN_CLOSE}")
}

/// Replaces the in-progress `@token` at the end of `markup` with the chip.
///
/// Everything from the last trigger character onward is dropped and the
/// chip is appended in its place. Without a trigger present the chip is
/// simply appended; commit is only ever offered while a mention context is
/// open, so that arm is a degradation path rather than a feature.
pub fn splice_mention(markup: &str, styled_token: &str) -> String {
    match markup.rfind(MENTION_TRIGGER) {
        Some(at) => format!("{}{styled_token}", &markup[..at]),
        None => format!("{markup}{styled_token}"),
    }
}

/// Drops chip tags, leaving the plain text (trigger and name included).
pub fn strip_mention_tags(markup: &str) -> String {
    let (plain, _) = parse_mention_markup(markup);
    plain
}

/// Splits markup into plain text plus the byte ranges of each chip.
///
/// The ranges index into the returned plain text and cover `@First Last`
/// without the surrounding tags. Unterminated or malformed tags are kept
/// as literal text rather than rejected.
pub fn parse_mention_markup(markup: &str) -> (String, Vec<Range<usize>>) {
    let mut plain = String::with_capacity(markup.len());
    let mut mentions = Vec::new();
    let mut rest = markup;
    while let Some(open) = rest.find(SPAN_OPEN_PREFIX) {
        let after_open = &rest[open + SPAN_OPEN_PREFIX.len()..];
        let Some(attr_end) = after_open.find("\">") else {
            break;
        };
        let body_and_rest = &after_open[attr_end + 2..];
        let Some(close) = body_and_rest.find(SPAN_CLOSE) else {
            break;
        };
        plain.push_str(&rest[..open]);
        let start = plain.len();
        plain.push_str(&body_and_rest[..close]);
        mentions.push(start..plain.len());
        rest = &body_and_rest[close + SPAN_CLOSE.len()..];
    }
    plain.push_str(rest);
    (plain, mentions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn token_wraps_name_with_trigger_and_style() {
        assert_eq!(
            styled_mention_token("Ada Lovelace", DEFAULT_MENTION_STYLE),
            "<span style=\"color: #117AA7;\">@Ada Lovelace</span>"
        );
    }

    #[test]
    fn splice_replaces_from_last_trigger() {
        let token = styled_mention_token("Ada Lovelace", DEFAULT_MENTION_STYLE);
        assert_eq!(
            splice_mention("hello @ad", &token),
            "hello <span style=\"color: #117AA7;\">@Ada Lovelace</span>"
        );
    }

    #[test]
    fn splice_on_bare_trigger_keeps_preceding_text() {
        let token = styled_mention_token("Grace Hopper", DEFAULT_MENTION_STYLE);
        assert_eq!(
            splice_mention("@", &token),
            "<span style=\"color: #117AA7;\">@Grace Hopper</span>"
        );
    }

    #[test]
    fn splice_without_trigger_appends() {
        let token = styled_mention_token("Grace Hopper", DEFAULT_MENTION_STYLE);
        assert_eq!(
            splice_mention("hello", &token),
            "hello<span style=\"color: #117AA7;\">@Grace Hopper</span>"
        );
    }

    #[test]
    fn earlier_chips_survive_a_second_splice() {
        let first = styled_mention_token("Ada Lovelace", DEFAULT_MENTION_STYLE);
        let markup = splice_mention("hi @ad", &first);
        let second = styled_mention_token("Grace Hopper", DEFAULT_MENTION_STYLE);
        let markup = splice_mention(&format!("{markup} and @gr"), &second);
        assert_eq!(
            markup,
            "hi <span style=\"color: #117AA7;\">@Ada Lovelace</span> and \
             <span style=\"color: #117AA7;\">@Grace Hopper</span>"
        );
    }

    #[test]
    fn parse_extracts_plain_text_and_ranges() {
        let markup = "hi <span style=\"color: #117AA7;\">@Ada Lovelace</span> there";
        let (plain, mentions) = parse_mention_markup(markup);
        assert_eq!(plain, "hi @Ada Lovelace there");
        assert_eq!(mentions, vec![3..16]);
        assert_eq!(&plain[mentions[0].clone()], "@Ada Lovelace");
    }

    #[test]
    fn parse_handles_multiple_chips() {
        let markup = "<span style=\"x\">@A B</span> <span style=\"y\">@C D</span>";
        let (plain, mentions) = parse_mention_markup(markup);
        assert_eq!(plain, "@A B @C D");
        assert_eq!(mentions, vec![0..4, 5..9]);
    }

    #[test]
    fn parse_keeps_malformed_tags_as_text() {
        let markup = "oops <span style=\"x\">@no close";
        let (plain, mentions) = parse_mention_markup(markup);
        assert_eq!(plain, "oops <span style=\"x\">@no close");
        assert_eq!(mentions, Vec::<std::ops::Range<usize>>::new());
    }

    #[test]
    fn strip_drops_tags_only() {
        let markup = "hi <span style=\"color: #117AA7;\">@Ada Lovelace</span>\u{a0}";
        assert_eq!(strip_mention_tags(markup), "hi @Ada Lovelace\u{a0}");
    }
}
