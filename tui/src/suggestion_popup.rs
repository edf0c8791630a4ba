use atmention_core::Candidate;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::WidgetRef;

/// Visible rows before the list starts scrolling.
pub(crate) const MAX_POPUP_ROWS: usize = 5;

/// Stateless view over the open suggestion session. The owning widget
/// passes the matches and the highlighted index each frame.
pub(crate) struct SuggestionPopup<'a> {
    matches: &'a [Candidate],
    highlighted: usize,
}

impl<'a> SuggestionPopup<'a> {
    pub(crate) fn new(matches: &'a [Candidate], highlighted: usize) -> Self {
        Self {
            matches,
            highlighted,
        }
    }

    /// Rows plus the surrounding border.
    pub(crate) fn required_height(&self) -> u16 {
        self.matches.len().min(MAX_POPUP_ROWS) as u16 + 2
    }

    /// First visible row, chosen so the highlighted row is always shown.
    fn window_start(&self) -> usize {
        if self.highlighted >= MAX_POPUP_ROWS {
            self.highlighted + 1 - MAX_POPUP_ROWS
        } else {
            0
        }
    }

    /// Maps a click inside the popup to the candidate on that row.
    pub(crate) fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<u64> {
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        // Top and bottom border rows are not selectable.
        if row == area.y || row + 1 >= area.y + area.height {
            return None;
        }
        let index = self.window_start() + (row - area.y - 1) as usize;
        self.matches.get(index).map(|c| c.id)
    }
}

impl WidgetRef for SuggestionPopup<'_> {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let start = self.window_start();
        let visible = self
            .matches
            .iter()
            .enumerate()
            .skip(start)
            .take(MAX_POPUP_ROWS);
        let mut lines: Vec<Line> = Vec::new();
        for (index, candidate) in visible {
            let prefix = if index == self.highlighted {
                "› "
            } else {
                "  "
            };
            let mut spans = vec![
                Span::raw(prefix),
                Span::raw(candidate.display_name()),
            ];
            if !candidate.email.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(format!("<{}>", candidate.email).dim());
            }
            let mut line = Line::from(spans);
            if index == self.highlighted {
                line = line.reversed();
            }
            lines.push(line);
        }
        Paragraph::new(lines)
            .block(Block::bordered().dim())
            .render(area, buf);
    }
}
