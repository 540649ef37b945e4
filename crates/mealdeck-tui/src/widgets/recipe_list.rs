//! Recipe list widget — the revealed page of recipes in the main pane.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Up one page |
//! | `PageDown` / `Ctrl+d` | Down one page |
//! | `G` | Jump to the last revealed recipe |
//!
//! Reaching the last revealed row is the "scrolled into view" signal: the app
//! shell checks [`RecipeListState::at_end`] after every move and asks the
//! browser for the next page.
//!
//! The last row of the pane is a footer: loading indicator, "load more"
//! hint, "All N recipes loaded" or "Nothing Found".

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use mealdeck_core::Recipe;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct RecipeListState {
    /// Index into the revealed recipes of the highlighted row.
    pub cursor: usize,
    /// Index of the first row on screen.
    pub offset: usize,
    /// Cached from the last render so `handle()` can keep the cursor on screen.
    last_height: Cell<usize>,
}

impl Default for RecipeListState {
    fn default() -> Self {
        Self {
            cursor: 0,
            offset: 0,
            last_height: Cell::new(20),
        }
    }
}

impl RecipeListState {
    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Back to the top, e.g. after the filter changed.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    /// Keep the cursor inside `len` revealed rows.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.scroll_into_view();
    }

    /// True when the cursor sits on the last revealed row.
    pub fn at_end(&self, len: usize) -> bool {
        len > 0 && self.cursor + 1 >= len
    }

    pub fn selected<'a>(&self, visible: &[&'a Recipe]) -> Option<&'a Recipe> {
        visible.get(self.cursor).copied()
    }

    /// Handle a navigation event against `len` revealed rows.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            return;
        }
        let last = len - 1;
        match event {
            AppEvent::Nav(Direction::Up) => self.cursor = self.cursor.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.cursor = (self.cursor + 1).min(last),
            AppEvent::ScrollUp => self.cursor = self.cursor.saturating_sub(PAGE_STEP),
            AppEvent::ScrollDown => self.cursor = (self.cursor + PAGE_STEP).min(last),
            AppEvent::ScrollToEnd => self.cursor = last,
            _ => return,
        }
        self.scroll_into_view();
        tracing::debug!(cursor = self.cursor, offset = self.offset, "list: cursor moved");
    }

    fn scroll_into_view(&mut self) {
        let height = self.height();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }
}

/// What the bottom row of the list says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFooter {
    /// An aggregation is in flight and nothing is shown yet.
    Loading,
    /// A deferred reveal is pending.
    LoadingMore,
    /// More matches are available.
    More { shown: usize, total: usize },
    AllLoaded(usize),
    NothingFound,
}

impl ListFooter {
    pub fn text(self) -> String {
        match self {
            ListFooter::Loading => "Loading recipes…".to_string(),
            ListFooter::LoadingMore => "Loading more recipes…".to_string(),
            ListFooter::More { shown, total } => {
                format!("Showing {shown} of {total}  ·  m: load more")
            }
            ListFooter::AllLoaded(total) => format!("All {total} recipes loaded"),
            ListFooter::NothingFound => "Nothing Found".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct RecipeList<'a> {
    state: &'a RecipeListState,
    recipes: &'a [&'a Recipe],
    footer: ListFooter,
    /// Current filter text, highlighted inside names.
    needle: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> RecipeList<'a> {
    pub fn new(
        state: &'a RecipeListState,
        recipes: &'a [&'a Recipe],
        footer: ListFooter,
        needle: &'a str,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, recipes, footer, needle, focused, theme }
    }
}

impl Widget for RecipeList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Recipes").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        // Last row is the footer
        let height = inner.height.saturating_sub(1) as usize;
        // Cache for handle() — draw always runs before handle()
        self.state.last_height.set(height);

        let total = self.recipes.len();
        let start = self.state.offset.min(total);
        let end = (start + height).min(total);

        let lines: Vec<Line> = self.recipes[start..end]
            .iter()
            .enumerate()
            .map(|(row, recipe)| {
                let line = render_recipe(recipe, self.needle, self.theme);
                if self.focused && start + row == self.state.cursor {
                    line.patch_style(self.theme.recipe_selected)
                } else {
                    line
                }
            })
            .collect();

        let text_area = Rect {
            width: inner.width.saturating_sub(1),
            height: height as u16,
            ..inner
        };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            height: height as u16,
            ..inner
        };
        Paragraph::new(lines).render(text_area, buf);

        if total > height {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }

        if inner.height > 0 {
            let footer_area = Rect {
                y: inner.bottom() - 1,
                height: 1,
                ..inner
            };
            let style = match self.footer {
                ListFooter::NothingFound => self.theme.notice_info.add_modifier(Modifier::BOLD),
                _ => self.theme.recipe_meta,
            };
            Paragraph::new(Line::from(Span::styled(self.footer.text(), style)))
                .centered()
                .render(footer_area, buf);
        }
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

fn render_recipe<'r>(recipe: &'r Recipe, needle: &str, theme: &Theme) -> Line<'r> {
    let mut spans = highlight(&recipe.name, needle, theme.recipe_title, theme.search_highlight);
    if !recipe.category.is_empty() {
        spans.push(Span::styled("  ·  ", Style::default().add_modifier(Modifier::DIM)));
        spans.push(Span::styled(
            recipe.category.as_str(),
            theme.category_style(&recipe.category),
        ));
    }
    if !recipe.area.is_empty() {
        spans.push(Span::styled("  ·  ", Style::default().add_modifier(Modifier::DIM)));
        spans.push(Span::styled(recipe.area.as_str(), theme.recipe_meta));
    }
    Line::from(spans)
}

/// Split `text` into spans with every case-insensitive occurrence of
/// `needle` styled `hl`. Text whose lowercase form changes byte length is
/// left unhighlighted.
fn highlight<'t>(text: &'t str, needle: &str, base: Style, hl: Style) -> Vec<Span<'t>> {
    let needle = needle.to_lowercase();
    let lower = text.to_lowercase();
    if needle.trim().is_empty() || lower.len() != text.len() {
        return vec![Span::styled(text, base)];
    }

    let mut spans = Vec::new();
    let mut pos = 0;
    for (start, _) in lower.match_indices(&needle) {
        if start < pos || !text.is_char_boundary(start) {
            continue;
        }
        if start > pos {
            spans.push(Span::styled(&text[pos..start], base));
        }
        let end = start + needle.len();
        spans.push(Span::styled(&text[start..end], hl));
        pos = end;
    }
    if pos < text.len() {
        spans.push(Span::styled(&text[pos..], base));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
