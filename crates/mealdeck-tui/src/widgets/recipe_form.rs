//! Create / edit form.
//!
//! Fields, top to bottom: name*, category*, area, image URL, video URL, three
//! ingredient / measure pairs and the instructions. `Tab`/`↓` and
//! `Shift+Tab`/`↑` move between fields, `Enter` moves on (and inserts a line
//! break inside the instructions), `Ctrl+s` submits, `Escape` cancels.
//!
//! Validation is not done here: the app shell hands [`FormState::draft`] to
//! the store and shows any [`ValidationError`](mealdeck_core::ValidationError)
//! through [`FormState::error`].

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::command_bar::{next_boundary, prev_boundary};
use mealdeck_core::types::EDITABLE_INGREDIENTS;
use mealdeck_core::{Ingredient, RecipeDraft};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    Area,
    Image,
    Video,
    Ingredient(usize),
    Measure(usize),
    Instructions,
}

impl Field {
    fn all() -> Vec<Field> {
        let mut fields = vec![Field::Name, Field::Category, Field::Area, Field::Image, Field::Video];
        for i in 0..EDITABLE_INGREDIENTS {
            fields.push(Field::Ingredient(i));
            fields.push(Field::Measure(i));
        }
        fields.push(Field::Instructions);
        fields
    }

    fn label(self) -> String {
        match self {
            Field::Name => "Name *".to_string(),
            Field::Category => "Category *".to_string(),
            Field::Area => "Area".to_string(),
            Field::Image => "Image URL".to_string(),
            Field::Video => "Video URL".to_string(),
            Field::Ingredient(i) => format!("Ingredient {}", i + 1),
            Field::Measure(i) => format!("Measure {}", i + 1),
            Field::Instructions => "Instructions".to_string(),
        }
    }
}

/// What the app shell should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Editing,
    Submit,
    Cancel,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct FormState {
    pub mode: FormMode,
    fields: Vec<Field>,
    values: Vec<String>,
    /// Index into `fields` of the focused field.
    pub focus: usize,
    /// Byte offset of the cursor within the focused value.
    cursor: usize,
    /// Inline validation message from the last submit.
    pub error: Option<String>,
}

impl FormState {
    pub fn create() -> Self {
        Self::from_draft(FormMode::Create, &RecipeDraft::default())
    }

    pub fn edit(id: impl Into<String>, draft: &RecipeDraft) -> Self {
        Self::from_draft(FormMode::Edit(id.into()), draft)
    }

    fn from_draft(mode: FormMode, draft: &RecipeDraft) -> Self {
        let fields = Field::all();
        let values: Vec<String> = fields
            .iter()
            .map(|f| match *f {
                Field::Name => draft.name.clone(),
                Field::Category => draft.category.clone(),
                Field::Area => draft.area.clone(),
                Field::Image => draft.thumbnail.clone(),
                Field::Video => draft.video.clone(),
                Field::Ingredient(i) => draft.ingredients[i].name.clone(),
                Field::Measure(i) => draft.ingredients[i].measure.clone(),
                Field::Instructions => draft.instructions.clone(),
            })
            .collect();
        let cursor = values[0].len();
        Self { mode, fields, values, focus: 0, cursor, error: None }
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields
            .iter()
            .position(|f| *f == field)
            .map(|i| self.values[i].as_str())
            .unwrap_or_default()
    }

    pub fn focused(&self) -> Field {
        self.fields[self.focus]
    }

    /// The form's contents as a draft.
    pub fn draft(&self) -> RecipeDraft {
        let mut ingredients: [Ingredient; EDITABLE_INGREDIENTS] = Default::default();
        for (i, slot) in ingredients.iter_mut().enumerate() {
            *slot = Ingredient::new(
                self.value(Field::Ingredient(i)).trim(),
                self.value(Field::Measure(i)).trim(),
            );
        }
        RecipeDraft {
            name: self.value(Field::Name).trim().to_string(),
            category: self.value(Field::Category).trim().to_string(),
            area: self.value(Field::Area).trim().to_string(),
            instructions: self.value(Field::Instructions).to_string(),
            thumbnail: self.value(Field::Image).trim().to_string(),
            video: self.value(Field::Video).trim().to_string(),
            ingredients,
        }
    }

    pub fn handle(&mut self, event: &AppEvent) -> FormOutcome {
        match event {
            AppEvent::Save => return FormOutcome::Submit,
            AppEvent::Escape => return FormOutcome::Cancel,
            AppEvent::FocusNext | AppEvent::Nav(Direction::Down) => self.move_focus(1),
            AppEvent::FocusPrev | AppEvent::Nav(Direction::Up) => self.move_focus(-1),
            AppEvent::Enter if self.focused() == Field::Instructions => self.insert('\n'),
            AppEvent::Enter => self.move_focus(1),
            AppEvent::Char(c) => self.insert(*c),
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let value = &mut self.values[self.focus];
                    let prev = prev_boundary(value, self.cursor);
                    value.remove(prev);
                    self.cursor = prev;
                }
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = prev_boundary(&self.values[self.focus], self.cursor);
            }
            AppEvent::Nav(Direction::Right) => {
                self.cursor = next_boundary(&self.values[self.focus], self.cursor);
            }
            _ => {}
        }
        FormOutcome::Editing
    }

    fn insert(&mut self, c: char) {
        self.values[self.focus].insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn move_focus(&mut self, step: isize) {
        let len = self.fields.len() as isize;
        self.focus = (self.focus as isize + step).rem_euclid(len) as usize;
        self.cursor = self.values[self.focus].len();
        tracing::debug!(field = ?self.focused(), "form: focus");
    }

    /// Absolute cursor position for the focused field, given the area the
    /// form was rendered into. Instructions keep the cursor at their label.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let row = area.y + 1 + self.focus as u16;
        let before = &self.values[self.focus][..self.cursor];
        let col = if self.focused() == Field::Instructions {
            0
        } else {
            before.chars().count() as u16
        };
        let x = (area.x + 1 + LABEL_WIDTH + col).min(area.right().saturating_sub(2));
        (x, row.min(area.bottom().saturating_sub(2)))
    }
}

const LABEL_WIDTH: u16 = 15;

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct RecipeForm<'a> {
    state: &'a FormState,
    theme: &'a Theme,
}

impl<'a> RecipeForm<'a> {
    pub fn new(state: &'a FormState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for RecipeForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match &self.state.mode {
            FormMode::Create => " New recipe ".to_string(),
            FormMode::Edit(id) => format!(" Edit recipe {id} "),
        };
        let block = Block::bordered()
            .title(title)
            .title_bottom(Line::from(" Ctrl+s:save  Esc:cancel ").right_aligned())
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, (field, value)) in self.state.fields.iter().zip(&self.state.values).enumerate() {
            let focused = i == self.state.focus;
            let label_style = if focused {
                self.theme.recipe_title
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            let label = Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize),
                label_style,
            );
            if *field == Field::Instructions {
                lines.push(Line::from(label));
                lines.extend(value.lines().map(|l| Line::raw(format!("  {l}"))));
            } else {
                lines.push(Line::from(vec![label, Span::raw(value.as_str())]));
            }
        }

        if let Some(err) = &self.state.error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(err.as_str(), self.theme.notice_error)));
        }

        Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
