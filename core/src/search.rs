use tracing::debug;

use crate::candidate::Candidate;
use crate::matcher::filter_candidates;

/// The open suggestion session: the current query, its matches and the
/// highlighted row. Inactive whenever there is no usable query or the
/// query matches nothing.
#[derive(Debug, Default)]
pub struct MentionSearch {
    active: bool,
    query: String,
    matches: Vec<Candidate>,
    highlighted: usize,
}

impl MentionSearch {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[Candidate] {
        &self.matches
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Re-runs the filter for a new query. A blank query or an empty match
    /// set closes the session; otherwise it (re)opens with the highlight
    /// back on the first row.
    pub fn update_query(&mut self, query: &str, candidates: &[Candidate]) {
        if query.trim().is_empty() {
            self.close();
            return;
        }
        let matches = filter_candidates(query, candidates);
        if matches.is_empty() {
            debug!("mention search: no matches for {query:?}, closing");
            self.close();
            return;
        }
        if !self.active {
            debug!("mention search: opening for {query:?}");
        }
        self.active = true;
        self.query = query.to_string();
        self.matches = matches;
        self.highlighted = 0;
    }

    pub fn close(&mut self) {
        self.active = false;
        self.query.clear();
        self.matches.clear();
        self.highlighted = 0;
    }

    /// Moves the highlight up one row, stopping at the top.
    pub fn highlight_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Moves the highlight down one row, stopping at the bottom.
    pub fn highlight_down(&mut self) {
        if self.highlighted + 1 < self.matches.len() {
            self.highlighted += 1;
        }
    }

    /// Takes the highlighted candidate and closes the session. Returns
    /// `None` if the session was not in a committable state.
    pub fn commit(&mut self) -> Option<Candidate> {
        let chosen = self.matches.get(self.highlighted).cloned();
        self.close();
        chosen
    }

    /// Takes the candidate with `id` (the pointer-selection path) and
    /// closes the session.
    pub fn choose_by_id(&mut self, id: u64) -> Option<Candidate> {
        let chosen = self.matches.iter().find(|c| c.id == id).cloned();
        self.close();
        chosen
    }
}
