use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

/// Terminal style for a committed mention chip, derived from the host's
/// CSS-like style directive. Only a `#RRGGBB` color is honoured; anything
/// unreadable falls back to a fixed accent color.
pub(crate) fn mention_span_style(directive: &str) -> Style {
    let color = parse_hex_color(directive).unwrap_or(Color::Cyan);
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn parse_hex_color(directive: &str) -> Option<Color> {
    let hash = directive.find('#')?;
    let hex = directive.get(hash + 1..hash + 7)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_the_default_directive() {
        let style = mention_span_style("color: #117AA7;");
        assert_eq!(style.fg, Some(Color::Rgb(0x11, 0x7A, 0xA7)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn unreadable_directives_fall_back() {
        assert_eq!(mention_span_style("").fg, Some(Color::Cyan));
        assert_eq!(mention_span_style("color: red;").fg, Some(Color::Cyan));
        assert_eq!(mention_span_style("color: #12;").fg, Some(Color::Cyan));
        assert_eq!(mention_span_style("color: #zzzzzz;").fg, Some(Color::Cyan));
    }
}
