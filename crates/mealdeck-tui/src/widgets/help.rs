//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Back / quit from Home"),
    ("Tab", "Cycle focus: filters → recipes → search"),
    ("/", "Focus the search filter"),
    ("Escape", "Close popup, leave input or go back"),
    ("↑ k  /  ↓ j", "Move through filters or recipes"),
    ("← h  /  → l", "Collapse / expand a filter group"),
    ("Space", "Toggle the facet under the cursor"),
    ("Enter", "Quick view of the selected recipe"),
    ("o", "Open the detail screen"),
    ("n", "New recipe"),
    ("e", "Edit the selected recipe"),
    ("d", "Delete the selected recipe"),
    ("m", "Load more recipes"),
    ("R", "Reset all filters"),
    ("x", "Dismiss the notice"),
    ("b", "Back from the detail screen"),
    ("PageUp  /  Ctrl+u", "Up one page"),
    ("PageDown / Ctrl+d", "Down one page"),
    ("G", "Jump to the last loaded recipe"),
    ("Ctrl+s", "Save the open form"),
    (":", "Command line (:help for commands)"),
    ("?", "Toggle this help popup"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(72, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" mealdeck — keybindings (? to close) ")
            .border_style(self.theme.border_command_bar);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<22}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

/// A `width` × `height` rect centred in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
