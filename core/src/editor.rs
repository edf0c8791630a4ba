//! The editing surface behind the mention input.
//!
//! Owns the plain-text buffer, the caret and the byte ranges of committed
//! mention chips, plus the placeholder lifecycle. The markup form is
//! derived on demand from the buffer and the chip ranges, so the two can
//! never drift apart.

use std::ops::Range;

use unicode_segmentation::GraphemeCursor;

use crate::splicer;

/// Caret movement exposed to hosts that need to reposition programmatically.
pub trait CaretController {
    fn move_to_start(&mut self);
    fn move_to_end(&mut self);
}

/// One run of display text, either ordinary or a committed chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_mention: bool,
}

#[derive(Debug)]
pub struct EditorSurface {
    text: String,
    /// Byte offset into `text`, always on a char boundary.
    caret: usize,
    /// Chip ranges into `text`, non-overlapping and ascending.
    mentions: Vec<Range<usize>>,
    placeholder: String,
    placeholder_active: bool,
}

impl EditorSurface {
    pub fn new(placeholder: &str) -> Self {
        Self {
            text: placeholder.to_string(),
            caret: 0,
            mentions: Vec::new(),
            placeholder: placeholder.to_string(),
            placeholder_active: true,
        }
    }

    /// The user's content. Empty while the placeholder is shown.
    pub fn content(&self) -> &str {
        if self.placeholder_active { "" } else { &self.text }
    }

    /// What the surface currently displays, placeholder included.
    pub fn display_text(&self) -> &str {
        &self.text
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder_active
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// The markup form: content with each chip wrapped in a styled span.
    pub fn markup(&self, style: &str) -> String {
        if self.placeholder_active {
            return String::new();
        }
        let mut out = String::with_capacity(self.text.len());
        let mut pos = 0;
        for range in &self.mentions {
            out.push_str(&self.text[pos..range.start]);
            out.push_str("<span style=\"");
            out.push_str(style);
            out.push_str("\">");
            out.push_str(&self.text[range.clone()]);
            out.push_str("</span>");
            pos = range.end;
        }
        out.push_str(&self.text[pos..]);
        out
    }

    /// Display runs in buffer order, chips flagged for styling.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut out = Vec::new();
        let mut pos = 0;
        for range in &self.mentions {
            if range.start > pos {
                out.push(Segment {
                    text: &self.text[pos..range.start],
                    is_mention: false,
                });
            }
            out.push(Segment {
                text: &self.text[range.clone()],
                is_mention: true,
            });
            pos = range.end;
        }
        if pos < self.text.len() || out.is_empty() {
            out.push(Segment {
                text: &self.text[pos..],
                is_mention: false,
            });
        }
        out
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    pub fn insert_str(&mut self, s: &str) {
        if self.placeholder_active {
            // The first real character replaces the placeholder wholesale.
            self.text.clear();
            self.caret = 0;
            self.mentions.clear();
            self.placeholder_active = false;
        }
        self.edit(self.caret..self.caret, s);
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if self.placeholder_active {
            return;
        }
        if let Some(start) = self.prev_boundary(self.caret) {
            self.edit(start..self.caret, "");
        }
    }

    pub fn delete_forward(&mut self) {
        if self.placeholder_active {
            return;
        }
        if let Some(end) = self.next_boundary(self.caret) {
            self.edit(self.caret..end, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(start) = self.prev_boundary(self.caret) {
            self.caret = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(end) = self.next_boundary(self.caret) {
            self.caret = end;
        }
    }

    /// Focus while the placeholder is shown pins the caret to the start so
    /// typing replaces the hint instead of appending after it.
    pub fn on_focus(&mut self) {
        if self.placeholder_active {
            self.caret = 0;
        }
    }

    /// Leaving the surface with only whitespace restores the placeholder.
    /// Returns true when a reset happened.
    pub fn on_blur(&mut self) -> bool {
        if !self.placeholder_active && self.text.trim().is_empty() {
            self.reset_to_placeholder();
            return true;
        }
        false
    }

    pub fn reset_to_placeholder(&mut self) {
        self.text = self.placeholder.clone();
        self.caret = 0;
        self.mentions.clear();
        self.placeholder_active = true;
    }

    /// Adopts an externally controlled value, given in markup form.
    /// A blank value restores the placeholder.
    pub fn set_value(&mut self, markup: &str) {
        let (plain, mentions) = splicer::parse_mention_markup(markup);
        if plain.trim().is_empty() {
            self.reset_to_placeholder();
            return;
        }
        self.text = plain;
        self.mentions = mentions;
        self.placeholder_active = false;
        self.caret = self.text.len();
    }

    /// Commits a mention: splices the chip over the trailing `@token` in
    /// the markup form, re-adopts the result and parks the caret at the
    /// end. A chip that ends the buffer gets a non-breaking space after it
    /// so the caret has plain text to sit in.
    pub fn apply_commit(&mut self, styled_token: &str, style: &str) {
        let markup = self.markup(style);
        let mut spliced = splicer::splice_mention(&markup, styled_token);
        if spliced.ends_with("</span>") {
            spliced.push(splicer::MENTION_SPACER);
        }
        let (plain, mentions) = splicer::parse_mention_markup(&spliced);
        self.text = plain;
        self.mentions = mentions;
        self.placeholder_active = false;
        self.caret = self.text.len();
    }

    /// Replaces `range` with `replacement`, then fixes up the caret and
    /// the chip ranges. A chip the edit touches loses its styling; its
    /// surviving text stays in the buffer as ordinary text.
    fn edit(&mut self, range: Range<usize>, replacement: &str) {
        let removed = range.end - range.start;
        let inserted = replacement.len();
        self.text.replace_range(range.clone(), replacement);

        self.mentions.retain_mut(|m| {
            if m.end <= range.start {
                true
            } else if m.start >= range.end {
                m.start = m.start - removed + inserted;
                m.end = m.end - removed + inserted;
                true
            } else {
                false
            }
        });

        if self.caret >= range.end {
            self.caret = self.caret - removed + inserted;
        } else if self.caret > range.start {
            self.caret = range.start + inserted;
        } else if self.caret == range.start {
            self.caret += inserted;
        }
    }

    fn prev_boundary(&self, pos: usize) -> Option<usize> {
        if pos == 0 {
            return None;
        }
        let mut cursor = GraphemeCursor::new(pos, self.text.len(), true);
        cursor.prev_boundary(&self.text, 0).ok().flatten()
    }

    fn next_boundary(&self, pos: usize) -> Option<usize> {
        if pos >= self.text.len() {
            return None;
        }
        let mut cursor = GraphemeCursor::new(pos, self.text.len(), true);
        cursor.next_boundary(&self.text, 0).ok().flatten()
    }
}

impl CaretController for EditorSurface {
    fn move_to_start(&mut self) {
        self.caret = 0;
    }

    fn move_to_end(&mut self) {
        self.caret = if self.placeholder_active {
            0
        } else {
            self.text.len()
        };
    }
}
