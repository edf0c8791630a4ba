//! A small interactive host for the mention input.
//!
//! Runs the widget full-screen with a status pane underneath showing the
//! notifications it emits. Tab blurs/focuses the input to exercise the
//! placeholder lifecycle; Ctrl+C quits.

use std::io::stdout;

use anyhow::Context;
use atmention_core::Candidate;
use color_eyre::eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::WidgetRef;

use crate::mention_input::InputResult;
use crate::mention_input::MentionInput;
use crate::mention_input::MentionInputConfig;

pub fn run() -> Result<()> {
    let candidates = load_candidates().map_err(|e| eyre!("{e:#}"))?;
    let mut terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let result = App::new(candidates).run(&mut terminal);
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

fn load_candidates() -> anyhow::Result<Vec<Candidate>> {
    serde_json::from_str(include_str!("../assets/users.json"))
        .context("parsing the bundled candidate fixture")
}

struct App {
    input: MentionInput,
    input_focused: bool,
    last_change: Option<String>,
    last_commit: Option<String>,
    input_area: Rect,
}

impl App {
    fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            input: MentionInput::new(MentionInputConfig {
                data_source: candidates,
                ..Default::default()
            }),
            input_focused: true,
            last_change: None,
            last_commit: None,
            input_area: Rect::default(),
        }
    }

    fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            match crossterm::event::read()? {
                Event::Key(key_event) => {
                    if is_quit(key_event) {
                        return Ok(());
                    }
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    if self.input_focused {
                        let (result, _) =
                            self.input.handle_mouse_event(self.input_area, mouse_event);
                        self.record(result);
                    }
                }
                _ => {}
            }
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Tab {
            self.input_focused = !self.input_focused;
            if self.input_focused {
                self.input.on_focus();
            } else {
                let result = self.input.on_blur();
                self.record(result);
            }
            return;
        }
        if self.input_focused {
            let (result, _) = self.input.handle_key_event(key_event);
            self.record(result);
        }
    }

    fn record(&mut self, result: InputResult) {
        match result {
            InputResult::None => {}
            InputResult::Changed { plain, markup } => {
                self.last_change = Some(format!("plain: {plain:?}  markup: {markup:?}"));
            }
            InputResult::Committed {
                plain,
                markup,
                candidate,
            } => {
                self.last_change = Some(format!("plain: {plain:?}  markup: {markup:?}"));
                self.last_commit = Some(format!(
                    "{} <{}> (id {})",
                    candidate.display_name(),
                    candidate.email,
                    candidate.id
                ));
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let input_height = self.input.desired_height().max(3);
        let [help_area, input_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(input_height),
            Constraint::Min(0),
        ])
        .areas(frame.area());
        self.input_area = input_area;

        let focus = if self.input_focused {
            "focused"
        } else {
            "blurred (Tab to focus)"
        };
        Line::from(format!(" type @name to mention · {focus} · Ctrl+C quits"))
            .dim()
            .render(help_area, frame.buffer_mut());

        self.input.render_ref(input_area, frame.buffer_mut());
        if self.input_focused
            && let Some(pos) = self.input.cursor_pos(input_area)
        {
            frame.set_cursor_position(pos);
        }

        let mut lines = Vec::new();
        if let Some(change) = &self.last_change {
            lines.push(Line::from(format!("last change: {change}")));
        }
        if let Some(commit) = &self.last_commit {
            lines.push(Line::from(format!("last commit: {commit}")));
        }
        Paragraph::new(lines)
            .block(Block::bordered().title(" notifications "))
            .render(status_area, frame.buffer_mut());
    }
}

fn is_quit(key_event: KeyEvent) -> bool {
    key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
}
