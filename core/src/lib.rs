//! Toolkit-independent machinery for an `@`-mention text input.
//!
//! The crate is split along the lifecycle of a mention:
//! [`detector`] recognises an in-progress `@token` near the end of the
//! buffer, [`matcher`] narrows the candidate directory against it,
//! [`search`] tracks the open suggestion session and its highlighted row,
//! and [`splicer`] turns an accepted candidate into a styled chip inside
//! the markup form of the text. [`editor`] owns the buffer, the caret and
//! the committed chip ranges, including the placeholder lifecycle.
//!
//! Nothing here knows about terminals or rendering; a frontend drives
//! these pieces from its own event loop.

pub mod candidate;
pub mod detector;
pub mod editor;
pub mod matcher;
pub mod search;
pub mod splicer;

pub use candidate::Candidate;
pub use detector::MENTION_TRIGGER;
pub use detector::detect_mention;
pub use editor::CaretController;
pub use editor::EditorSurface;
pub use editor::Segment;
pub use matcher::filter_candidates;
pub use search::MentionSearch;
pub use splicer::DEFAULT_MENTION_STYLE;
pub use splicer::MENTION_SPACER;
pub use splicer::parse_mention_markup;
pub use splicer::splice_mention;
pub use splicer::strip_mention_tags;
pub use splicer::styled_mention_token;
