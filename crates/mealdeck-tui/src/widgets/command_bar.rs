//! Vim-style command bar — a single-line overlay at the bottom of the screen.
//!
//! Activated by pressing `:` outside text inputs. Displays a `:` prefix
//! followed by the typed command. `Enter` parses the command; `Escape`
//! cancels.
//!
//! # Supported commands
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Leave the current screen (quit on Home) |
//! | `q!` | Quit from anywhere |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `load <term>` | Search TheMealDB for a new term |
//! | `new` | Open the create form |
//! | `open <id>` / `edit <id>` | Detail screen / edit form |
//! | `go <path>` | Navigate to `/`, `/meal/<id>`, `/create`, `/edit/<id>` |
//! | `reset` | Clear every filter |
//! | `more` | Load the next page |

use crate::commands::Command;
use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// What the bar wants the app shell to do after a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandInput {
    /// Still typing (or showing an error); keep the bar open.
    Editing,
    /// Close the bar without acting.
    Cancelled,
    /// Close the bar and run this command.
    Submitted(Command),
}

/// Persistent state for the command bar.
#[derive(Debug, Default)]
pub struct CommandBarState {
    /// The text typed after the `:` prefix.
    pub input: String,
    /// Byte offset of the cursor within `input`.
    pub cursor: usize,
    /// Error message from the last failed command, cleared on the next key.
    pub error: Option<String>,
}

impl CommandBarState {
    /// Reset to a blank, error-free state. Call when opening the bar.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.error = None;
    }

    /// Handle a key event while the command bar is focused.
    pub fn handle(&mut self, event: &AppEvent) -> CommandInput {
        // Any keypress dismisses the error display so the user can edit again.
        self.error = None;

        match event {
            AppEvent::Escape => {
                tracing::debug!("command bar cancelled");
                self.clear();
                CommandInput::Cancelled
            }
            AppEvent::Enter => match Command::parse(&self.input) {
                Ok(cmd) => {
                    tracing::debug!(command = ?cmd, "command bar submitted");
                    self.clear();
                    CommandInput::Submitted(cmd)
                }
                Err(msg) if msg.is_empty() => {
                    self.clear();
                    CommandInput::Cancelled
                }
                Err(msg) => {
                    self.error = Some(msg);
                    CommandInput::Editing
                }
            },
            AppEvent::Char(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                CommandInput::Editing
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_boundary(&self.input, self.cursor);
                    self.input.remove(prev);
                    self.cursor = prev;
                }
                CommandInput::Editing
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = prev_boundary(&self.input, self.cursor);
                CommandInput::Editing
            }
            AppEvent::Nav(Direction::Right) => {
                self.cursor = next_boundary(&self.input, self.cursor);
                CommandInput::Editing
            }
            _ => CommandInput::Editing,
        }
    }

    /// Absolute terminal column of the text cursor within `area`.
    ///
    /// The `:` glyph occupies column 0, so the cursor starts at column 1.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let col = 1 + self.input[..self.cursor].chars().count() as u16;
        (area.x + col).min(area.right().saturating_sub(1))
    }
}

pub(crate) fn prev_boundary(s: &str, cursor: usize) -> usize {
    s[..cursor].char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

pub(crate) fn next_boundary(s: &str, cursor: usize) -> usize {
    s[cursor..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| cursor + i)
        .unwrap_or(s.len())
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Single-row command-bar overlay.
///
/// The caller passes a 1-row `Rect` at the bottom of the terminal.
pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let line = if let Some(ref err) = self.state.error {
            Line::from(Span::styled(format!("E  {err}"), self.theme.notice_error))
        } else {
            Line::from(vec![
                Span::styled(":", self.theme.border_command_bar),
                Span::styled(
                    self.state.input.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> CommandBarState {
        let mut s = CommandBarState::default();
        for c in text.chars() {
            s.handle(&AppEvent::Char(c));
        }
        s
    }

    #[test]
    fn char_insert_and_backspace() {
        let mut s = typed("foo");
        assert_eq!(s.input, "foo");
        assert_eq!(s.cursor, 3);
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.input, "fo");
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut s = typed("né");
        s.handle(&AppEvent::Nav(Direction::Left));
        assert_eq!(s.cursor, 1);
        s.handle(&AppEvent::Char('x'));
        assert_eq!(s.input, "nxé");
    }

    #[test]
    fn enter_submits_parsed_command() {
        let mut s = typed("load curry");
        assert_eq!(
            s.handle(&AppEvent::Enter),
            CommandInput::Submitted(Command::Load("curry".to_string()))
        );
        assert!(s.input.is_empty());
    }

    #[test]
    fn bad_command_stays_open_with_error() {
        let mut s = typed("frobnicate");
        assert_eq!(s.handle(&AppEvent::Enter), CommandInput::Editing);
        assert!(s.error.is_some());
        s.handle(&AppEvent::Char('x'));
        assert!(s.error.is_none());
    }

    #[test]
    fn empty_enter_and_escape_cancel() {
        let mut s = CommandBarState::default();
        assert_eq!(s.handle(&AppEvent::Enter), CommandInput::Cancelled);
        let mut s = typed("he");
        assert_eq!(s.handle(&AppEvent::Escape), CommandInput::Cancelled);
        assert!(s.input.is_empty());
    }
}
