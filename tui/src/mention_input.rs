//! The embeddable mention-aware input widget.
//!
//! Hosts feed it key and mouse events and act on the returned
//! [`InputResult`]; rendering is a [`WidgetRef`] pass over the editing
//! surface and, while a search is open, the suggestion popup beneath it.

use atmention_core::Candidate;
use atmention_core::CaretController;
use atmention_core::EditorSurface;
use atmention_core::MentionSearch;
use atmention_core::detect_mention;
use atmention_core::splicer::DEFAULT_MENTION_STYLE;
use atmention_core::splicer::styled_mention_token;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::WidgetRef;
use unicode_width::UnicodeWidthStr;

use crate::style::mention_span_style;
use crate::suggestion_popup::SuggestionPopup;

/// Construction-time configuration. Every field has a sensible default;
/// hosts typically only supply the candidate directory.
pub struct MentionInputConfig {
    pub data_source: Vec<Candidate>,
    pub mention_style: String,
    pub placeholder_text: String,
}

impl Default for MentionInputConfig {
    fn default() -> Self {
        Self {
            data_source: Vec::new(),
            mention_style: DEFAULT_MENTION_STYLE.to_string(),
            placeholder_text: "Mention someone...".to_string(),
        }
    }
}

/// What an input event did, as seen by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputResult {
    None,
    /// The content changed; both the plain and markup forms are carried.
    Changed { plain: String, markup: String },
    /// A mention was committed into the content.
    Committed {
        plain: String,
        markup: String,
        candidate: Candidate,
    },
}

pub struct MentionInput {
    editor: EditorSurface,
    search: MentionSearch,
    data_source: Vec<Candidate>,
    mention_style: String,
}

impl MentionInput {
    pub fn new(config: MentionInputConfig) -> Self {
        Self {
            editor: EditorSurface::new(&config.placeholder_text),
            search: MentionSearch::default(),
            data_source: config.data_source,
            mention_style: config.mention_style,
        }
    }

    pub fn plain_text(&self) -> &str {
        self.editor.content()
    }

    pub fn markup(&self) -> String {
        self.editor.markup(&self.mention_style)
    }

    pub fn is_placeholder(&self) -> bool {
        self.editor.is_placeholder()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_active()
    }

    /// Adopts an externally controlled value (markup form). Any open
    /// search is abandoned.
    pub fn set_value(&mut self, markup: &str) {
        self.editor.set_value(markup);
        self.search.close();
    }

    pub fn on_focus(&mut self) {
        self.editor.on_focus();
    }

    pub fn on_blur(&mut self) -> InputResult {
        self.search.close();
        if self.editor.on_blur() {
            return self.changed();
        }
        InputResult::None
    }

    /// Routes one key event. The boolean is "needs redraw".
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> (InputResult, bool) {
        if key_event.kind == KeyEventKind::Release {
            return (InputResult::None, false);
        }
        // While the hint text is showing the caret is pinned; navigation
        // keys must not appear to move through it.
        if self.editor.is_placeholder()
            && matches!(
                key_event.code,
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right
            )
        {
            return (InputResult::None, false);
        }
        if self.search.is_active() {
            match key_event.code {
                KeyCode::Up => {
                    self.search.highlight_up();
                    return (InputResult::None, true);
                }
                KeyCode::Down => {
                    self.search.highlight_down();
                    return (InputResult::None, true);
                }
                KeyCode::Enter => {
                    return match self.search.commit() {
                        Some(candidate) => (self.commit_candidate(candidate), true),
                        None => (InputResult::None, true),
                    };
                }
                KeyCode::Esc => {
                    // Cancel the search only; the typed token stays.
                    self.search.close();
                    return (InputResult::None, true);
                }
                _ => {}
            }
        }
        match key_event.code {
            KeyCode::Char(ch)
                if !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.editor.insert_char(ch);
                (self.after_content_change(), true)
            }
            KeyCode::Backspace => {
                self.editor.backspace();
                (self.after_content_change(), true)
            }
            KeyCode::Delete => {
                self.editor.delete_forward();
                (self.after_content_change(), true)
            }
            KeyCode::Enter => {
                self.editor.insert_newline();
                (self.after_content_change(), true)
            }
            KeyCode::Left => {
                self.editor.move_left();
                (InputResult::None, true)
            }
            KeyCode::Right => {
                self.editor.move_right();
                (InputResult::None, true)
            }
            KeyCode::Home => {
                self.editor.move_to_start();
                (InputResult::None, true)
            }
            KeyCode::End => {
                self.editor.move_to_end();
                (InputResult::None, true)
            }
            _ => {
                tracing::trace!("mention input ignoring key event {key_event:?}");
                (InputResult::None, false)
            }
        }
    }

    /// Routes one mouse event; `area` is the rect the widget was last
    /// rendered into.
    pub fn handle_mouse_event(&mut self, area: Rect, mouse_event: MouseEvent) -> (InputResult, bool) {
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return (InputResult::None, false);
        }
        let [_, popup_area] = self.layout_areas(area);
        if self.search.is_active() {
            let popup = SuggestionPopup::new(self.search.matches(), self.search.highlighted());
            if let Some(id) = popup.hit_test(popup_area, mouse_event.column, mouse_event.row) {
                return (self.choose(id), true);
            }
        }
        // Clicks in the text surface never move the caret while the hint
        // is showing, and caret-by-click is otherwise not offered.
        (InputResult::None, false)
    }

    /// Commits the candidate with `id` from the open search, as if the
    /// user picked its row.
    pub fn choose(&mut self, id: u64) -> InputResult {
        match self.search.choose_by_id(id) {
            Some(candidate) => self.commit_candidate(candidate),
            None => InputResult::None,
        }
    }

    /// Rows this widget wants: the bordered surface plus, while a search
    /// is open, the popup beneath it.
    pub fn desired_height(&self) -> u16 {
        let content_rows = self.editor.display_text().matches('\n').count() as u16 + 1;
        content_rows + 2 + self.popup_height()
    }

    /// Terminal cell the caret occupies, for the host to place the
    /// hardware cursor.
    pub fn cursor_pos(&self, area: Rect) -> Option<Position> {
        let [surface, _] = self.layout_areas(area);
        if surface.height < 3 || surface.width < 3 {
            return None;
        }
        let before = &self.editor.display_text()[..self.editor.caret()];
        let row = before.matches('\n').count() as u16;
        let last_line = before.rsplit('\n').next().unwrap_or("");
        let col = UnicodeWidthStr::width(last_line) as u16;
        let x = (surface.x + 1 + col).min(surface.x + surface.width - 2);
        let y = (surface.y + 1 + row).min(surface.y + surface.height - 2);
        Some(Position::new(x, y))
    }

    fn layout_areas(&self, area: Rect) -> [Rect; 2] {
        Layout::vertical([Constraint::Min(3), Constraint::Length(self.popup_height())])
            .areas(area)
    }

    fn popup_height(&self) -> u16 {
        if self.search.is_active() {
            SuggestionPopup::new(self.search.matches(), self.search.highlighted())
                .required_height()
        } else {
            0
        }
    }

    fn after_content_change(&mut self) -> InputResult {
        self.sync_search();
        self.changed()
    }

    fn sync_search(&mut self) {
        match detect_mention(self.editor.content()) {
            Some(query) => self.search.update_query(&query, &self.data_source),
            None => self.search.close(),
        }
    }

    fn changed(&self) -> InputResult {
        InputResult::Changed {
            plain: self.editor.content().to_string(),
            markup: self.markup(),
        }
    }

    fn commit_candidate(&mut self, candidate: Candidate) -> InputResult {
        let token = styled_mention_token(&candidate.display_name(), &self.mention_style);
        self.editor.apply_commit(&token, &self.mention_style);
        tracing::debug!("committed mention for candidate {}", candidate.id);
        InputResult::Committed {
            plain: self.editor.content().to_string(),
            markup: self.markup(),
            candidate,
        }
    }

    fn display_lines(&self) -> Vec<Line<'_>> {
        if self.editor.is_placeholder() {
            return vec![Line::from(self.editor.display_text().dim().italic())];
        }
        let chip_style = mention_span_style(&self.mention_style);
        let mut lines = vec![Line::default()];
        for segment in self.editor.segments() {
            let style = if segment.is_mention {
                chip_style
            } else {
                Style::default()
            };
            let mut rows = segment.text.split('\n');
            if let Some(first) = rows.next()
                && !first.is_empty()
                && let Some(last) = lines.last_mut()
            {
                last.spans.push(Span::styled(first, style));
            }
            for row in rows {
                let mut line = Line::default();
                if !row.is_empty() {
                    line.spans.push(Span::styled(row, style));
                }
                lines.push(line);
            }
        }
        lines
    }
}

impl WidgetRef for MentionInput {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let [surface, popup_area] = self.layout_areas(area);
        Paragraph::new(self.display_lines())
            .block(Block::bordered())
            .render(surface, buf);
        if self.search.is_active() {
            SuggestionPopup::new(self.search.matches(), self.search.highlighted())
                .render_ref(popup_area, buf);
        }
    }
}
