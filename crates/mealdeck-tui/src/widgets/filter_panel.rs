//! Filter panel — collapsible Category and Area facet groups in the left pane.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor up and down the visible rows.
//! - `→`/`l` expands the group under the cursor; `←`/`h` collapses it.
//! - `Space` or `Enter` on a facet toggles it; on a group header it clears
//!   that group's selection (or expands a collapsed group).
//!
//! The panel owns only layout state (facet names, expansion, cursor). Which
//! facets are selected lives in the [`Filter`]; the panel reads it at render
//! time and reports toggles back as [`FacetAction`]s.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use mealdeck_core::Filter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    Category,
    Area,
}

impl FacetKind {
    fn label(self) -> &'static str {
        match self {
            FacetKind::Category => "Categories",
            FacetKind::Area => "Areas",
        }
    }

    fn selected(self, filter: &Filter) -> &BTreeSet<String> {
        match self {
            FacetKind::Category => &filter.categories,
            FacetKind::Area => &filter.areas,
        }
    }
}

/// A change the app shell should apply to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetAction {
    Toggle(FacetKind, String),
    Clear(FacetKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeSelection {
    Selected,
    Unselected,
    /// Some (but not all) facets in the group are selected.
    Partial,
}

#[derive(Debug, Clone)]
pub struct FacetGroup {
    pub kind: FacetKind,
    pub expanded: bool,
    pub values: Vec<String>,
}

/// One visible row of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Row<'a> {
    Header(usize),
    Facet(usize, &'a str),
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct FilterPanelState {
    pub groups: Vec<FacetGroup>,
    /// Index into the currently-visible (flattened) rows.
    pub cursor: usize,
}

impl Default for FilterPanelState {
    fn default() -> Self {
        Self {
            groups: vec![
                FacetGroup { kind: FacetKind::Category, expanded: true, values: Vec::new() },
                FacetGroup { kind: FacetKind::Area, expanded: false, values: Vec::new() },
            ],
            cursor: 0,
        }
    }
}

impl FilterPanelState {
    /// Replace the facet values after the collection changed.
    pub fn set_values(&mut self, categories: Vec<String>, areas: Vec<String>) {
        for group in &mut self.groups {
            group.values = match group.kind {
                FacetKind::Category => categories.clone(),
                FacetKind::Area => areas.clone(),
            };
        }
        self.clamp_cursor();
    }

    fn rows(&self) -> Vec<Row<'_>> {
        let mut out = Vec::new();
        for (g, group) in self.groups.iter().enumerate() {
            out.push(Row::Header(g));
            if group.expanded {
                out.extend(group.values.iter().map(|v| Row::Facet(g, v.as_str())));
            }
        }
        out
    }

    /// Handle an [`AppEvent`]. Returns the filter change to apply, if any.
    pub fn handle(&mut self, event: &AppEvent) -> Option<FacetAction> {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            AppEvent::Nav(Direction::Down) => {
                let max = self.rows().len().saturating_sub(1);
                if self.cursor < max {
                    self.cursor += 1;
                }
                None
            }
            AppEvent::Nav(Direction::Right) => {
                self.set_expanded_at_cursor(true);
                None
            }
            AppEvent::Nav(Direction::Left) => {
                self.set_expanded_at_cursor(false);
                None
            }
            AppEvent::Enter | AppEvent::Char(' ') => self.activate(),
            _ => None,
        }
    }

    fn activate(&mut self) -> Option<FacetAction> {
        let row = self.rows().into_iter().nth(self.cursor)?;
        match row {
            Row::Header(g) if !self.groups[g].expanded => {
                self.groups[g].expanded = true;
                None
            }
            Row::Header(g) => {
                let kind = self.groups[g].kind;
                tracing::debug!(?kind, "filter: clear group");
                Some(FacetAction::Clear(kind))
            }
            Row::Facet(g, value) => {
                let kind = self.groups[g].kind;
                tracing::debug!(?kind, value, "filter: toggle facet");
                Some(FacetAction::Toggle(kind, value.to_string()))
            }
        }
    }

    fn set_expanded_at_cursor(&mut self, expanded: bool) {
        let group = match self.rows().into_iter().nth(self.cursor) {
            Some(Row::Header(g)) | Some(Row::Facet(g, _)) => g,
            None => return,
        };
        self.groups[group].expanded = expanded;
        if !expanded {
            // Park the cursor on the collapsed header.
            self.cursor = self
                .rows()
                .iter()
                .position(|r| *r == Row::Header(group))
                .unwrap_or(0);
        }
        tracing::debug!(group, expanded, "filter: expand");
    }

    fn clamp_cursor(&mut self) {
        let max = self.rows().len().saturating_sub(1);
        self.cursor = self.cursor.min(max);
    }
}

fn group_selection(group: &FacetGroup, filter: &Filter) -> NodeSelection {
    let selected = group.kind.selected(filter);
    if selected.is_empty() {
        NodeSelection::Unselected
    } else if group.values.iter().all(|v| selected.contains(v)) {
        NodeSelection::Selected
    } else {
        NodeSelection::Partial
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct FilterPanel<'a> {
    state: &'a FilterPanelState,
    filter: &'a Filter,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> FilterPanel<'a> {
    pub fn new(
        state: &'a FilterPanelState,
        filter: &'a Filter,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, filter, focused, theme }
    }
}

impl Widget for FilterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Filters").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .state
            .rows()
            .into_iter()
            .map(|row| match row {
                Row::Header(g) => {
                    let group = &self.state.groups[g];
                    let expand = if group.expanded { "▼ " } else { "▶ " };
                    let sel = match group_selection(group, self.filter) {
                        NodeSelection::Selected => " ✓",
                        NodeSelection::Unselected => "",
                        NodeSelection::Partial => " ◐",
                    };
                    ListItem::new(Line::from(Span::styled(
                        format!("{expand}{}{sel}", group.kind.label()),
                        Style::default().add_modifier(Modifier::BOLD),
                    )))
                }
                Row::Facet(g, value) => {
                    let kind = self.state.groups[g].kind;
                    let mark = if kind.selected(self.filter).contains(value) { "✓" } else { "○" };
                    let style = match kind {
                        FacetKind::Category => self.theme.category_style(value),
                        FacetKind::Area => Style::default(),
                    };
                    ListItem::new(Line::from(vec![
                        Span::raw(format!("  {mark} ")),
                        Span::styled(value.to_string(), style),
                    ]))
                }
            })
            .collect();

        let list = List::new(items).highlight_style(if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> FilterPanelState {
        let mut s = FilterPanelState::default();
        s.set_values(
            vec!["Beef".into(), "Pasta".into()],
            vec!["British".into(), "Italian".into()],
        );
        s
    }

    #[test]
    fn enter_on_facet_toggles_it() {
        let mut s = panel();
        s.handle(&AppEvent::Nav(Direction::Down));
        assert_eq!(
            s.handle(&AppEvent::Enter),
            Some(FacetAction::Toggle(FacetKind::Category, "Beef".into()))
        );
    }

    #[test]
    fn collapsed_group_hides_facets_and_expands_on_enter() {
        let mut s = panel();
        // Categories header + 2 facets + Areas header (collapsed)
        assert_eq!(s.rows().len(), 4);
        s.cursor = 3;
        assert_eq!(s.handle(&AppEvent::Enter), None);
        assert_eq!(s.rows().len(), 6);
        s.cursor = 5;
        assert_eq!(
            s.handle(&AppEvent::Char(' ')),
            Some(FacetAction::Toggle(FacetKind::Area, "Italian".into()))
        );
    }

    #[test]
    fn enter_on_open_header_clears_group() {
        let mut s = panel();
        assert_eq!(
            s.handle(&AppEvent::Enter),
            Some(FacetAction::Clear(FacetKind::Category))
        );
    }

    #[test]
    fn collapsing_from_a_facet_parks_cursor_on_header() {
        let mut s = panel();
        s.cursor = 2;
        s.handle(&AppEvent::Nav(Direction::Left));
        assert_eq!(s.cursor, 0);
        assert_eq!(s.rows().len(), 2);
    }

    #[test]
    fn group_selection_states() {
        let s = panel();
        let group = &s.groups[0];
        assert_eq!(group_selection(group, &Filter::new()), NodeSelection::Unselected);
        let some = Filter::new().with_categories(["Beef"]);
        assert_eq!(group_selection(group, &some), NodeSelection::Partial);
        let all = Filter::new().with_categories(["Beef", "Pasta"]);
        assert_eq!(group_selection(group, &all), NodeSelection::Selected);
    }

    #[test]
    fn shrinking_values_clamps_cursor() {
        let mut s = panel();
        s.cursor = 3;
        s.set_values(Vec::new(), Vec::new());
        assert_eq!(s.cursor, 1);
    }
}
