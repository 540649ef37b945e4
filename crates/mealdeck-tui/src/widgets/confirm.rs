//! Yes / no popup used to answer the store's delete confirmation.

use crate::event::AppEvent;
use crate::theme::Theme;
use crate::widgets::help::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

/// A question waiting for an answer, plus what it is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirm {
    pub prompt: String,
    /// Recipe id the answer applies to.
    pub id: String,
    /// Recipe name shown under the prompt.
    pub subject: String,
}

impl PendingConfirm {
    /// `Some(answer)` once the user pressed y/Enter or n/Esc.
    pub fn answer(event: &AppEvent) -> Option<bool> {
        match event {
            AppEvent::Char('y') | AppEvent::Char('Y') | AppEvent::Enter => Some(true),
            AppEvent::Char('n') | AppEvent::Char('N') | AppEvent::Escape | AppEvent::Quit => {
                Some(false)
            }
            _ => None,
        }
    }
}

pub struct ConfirmPopup<'a> {
    pending: &'a PendingConfirm,
    theme: &'a Theme,
}

impl<'a> ConfirmPopup<'a> {
    pub fn new(pending: &'a PendingConfirm, theme: &'a Theme) -> Self {
        Self { pending, theme }
    }
}

impl Widget for ConfirmPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.pending.prompt.chars().count() as u16 + 6).max(40);
        let popup = centered_rect(width, 7, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" Delete ")
            .border_style(self.theme.notice_warning);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines = vec![
            Line::from(self.pending.prompt.as_str()),
            Line::from(Span::styled(self.pending.subject.as_str(), self.theme.recipe_title)),
            Line::default(),
            Line::from(vec![
                Span::styled("y", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": delete   "),
                Span::styled("n", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": keep"),
            ]),
        ];
        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers() {
        assert_eq!(PendingConfirm::answer(&AppEvent::Char('y')), Some(true));
        assert_eq!(PendingConfirm::answer(&AppEvent::Enter), Some(true));
        assert_eq!(PendingConfirm::answer(&AppEvent::Char('n')), Some(false));
        assert_eq!(PendingConfirm::answer(&AppEvent::Escape), Some(false));
        assert_eq!(PendingConfirm::answer(&AppEvent::Char('x')), None);
    }
}
