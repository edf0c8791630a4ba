//! Terminal embedding of the `@`-mention input: the composable widget
//! itself plus a small demo host, built on ratatui and crossterm.

pub mod app;
pub mod mention_input;
mod style;
mod suggestion_popup;

pub use mention_input::InputResult;
pub use mention_input::MentionInput;
pub use mention_input::MentionInputConfig;
