//! Top strip: the current route as a breadcrumb with key hints on the right,
//! and the dismissible notice line underneath it.

use crate::theme::Theme;
use mealdeck_core::{Notice, Route};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Renders the 1-line route strip at the top of the screen.
pub struct NavBar<'a> {
    route: &'a Route,
    /// Recipe name for detail / edit routes.
    title: Option<&'a str>,
    loading: bool,
    theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(route: &'a Route, title: Option<&'a str>, loading: bool, theme: &'a Theme) -> Self {
        Self { route, title, loading, theme }
    }

    fn crumbs(&self) -> String {
        let leaf = match self.route {
            Route::Home => return " mealdeck ".to_string(),
            Route::Detail(id) => self.title.unwrap_or(id).to_string(),
            Route::Create => "New recipe".to_string(),
            Route::Edit(id) => format!("Edit {}", self.title.unwrap_or(id)),
            Route::NotFound => "Not found".to_string(),
        };
        format!(" mealdeck › {leaf} ")
    }

    fn hints(&self) -> &'static str {
        match self.route {
            Route::Home => " /:search  n:new  ?:help  q:quit ",
            Route::Detail(_) => " e:edit  d:delete  b:back ",
            Route::Create | Route::Edit(_) => " Ctrl+s:save  Esc:cancel ",
            Route::NotFound => " Enter:home ",
        }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            self.crumbs(),
            self.theme.recipe_title.add_modifier(Modifier::REVERSED),
        )];
        if self.loading {
            spans.push(Span::styled("  loading…", self.theme.recipe_meta));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let hint = self.hints();
        let hint_x = area.right().saturating_sub(hint.chars().count() as u16);
        buf.set_string(hint_x, area.y, hint, Style::default().add_modifier(Modifier::DIM));
    }
}

/// One-line banner for the current [`Notice`].
pub struct NoticeBar<'a> {
    notice: &'a Notice,
    theme: &'a Theme,
}

impl<'a> NoticeBar<'a> {
    pub fn new(notice: &'a Notice, theme: &'a Theme) -> Self {
        Self { notice, theme }
    }
}

impl Widget for NoticeBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.notice_style(self.notice);
        let dismiss = if self.notice.is_warning() { "  (x to dismiss)" } else { "" };
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", self.notice), style),
            Span::styled(dismiss, Style::default().add_modifier(Modifier::DIM)),
        ]))
        .render(area, buf);
    }
}
