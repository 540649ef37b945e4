//! One recipe, rendered in full: heading, tags, links, ingredients and
//! instructions.
//!
//! Used both for the detail screen (`o`) and, wrapped in a popup, for the
//! quick view over the list (`Enter`). `↑`/`↓` scroll long instructions.

use crate::theme::Theme;
use crate::widgets::help::centered_rect;
use mealdeck_core::Recipe;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

pub struct RecipeView<'a> {
    recipe: &'a Recipe,
    scroll: u16,
    popup: bool,
    theme: &'a Theme,
}

impl<'a> RecipeView<'a> {
    pub fn new(recipe: &'a Recipe, scroll: u16, theme: &'a Theme) -> Self {
        Self { recipe, scroll, popup: false, theme }
    }

    /// Render as a centred modal instead of filling the area.
    pub fn popup(mut self) -> Self {
        self.popup = true;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let r = self.recipe;
        let label = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();

        let mut tags = Vec::new();
        if !r.category.is_empty() {
            tags.push(Span::styled(r.category.as_str(), self.theme.category_style(&r.category)));
        }
        if !r.area.is_empty() {
            if !tags.is_empty() {
                tags.push(Span::raw("  ·  "));
            }
            tags.push(Span::styled(r.area.as_str(), self.theme.recipe_meta));
        }
        lines.push(Line::from(tags));
        lines.push(Line::default());

        if !r.thumbnail.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Image  ", label),
                Span::styled(r.thumbnail.as_str(), self.theme.recipe_meta),
            ]));
        }
        if let Some(video) = r.video.as_deref() {
            lines.push(Line::from(vec![
                Span::styled("Video  ", label),
                Span::styled(video, self.theme.recipe_meta),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Ingredients", label)));
        if r.ingredients.is_empty() {
            lines.push(Line::from(Span::styled("  none listed", self.theme.recipe_meta)));
        }
        for ingredient in &r.ingredients {
            let mut spans = vec![Span::raw("  • ")];
            if !ingredient.measure.is_empty() {
                spans.push(Span::styled(ingredient.measure.as_str(), self.theme.recipe_meta));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::raw(ingredient.name.as_str()));
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Instructions", label)));
        lines.extend(r.instructions.lines().map(Line::raw));
        lines
    }
}

impl Widget for RecipeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = if self.popup {
            let popup = centered_rect(area.width * 4 / 5, area.height * 4 / 5, area);
            Clear.render(popup, buf);
            popup
        } else {
            area
        };

        let hint = if self.popup { " Esc:close  o:open  e:edit  d:delete " } else { " ↑↓:scroll " };
        let block = Block::bordered()
            .title(Span::styled(format!(" {} ", self.recipe.name), self.theme.recipe_title))
            .title_bottom(Line::from(hint).right_aligned())
            .border_style(if self.popup {
                self.theme.border_command_bar
            } else {
                self.theme.border_focused
            });

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealdeck_core::Ingredient;

    fn recipe() -> Recipe {
        Recipe {
            id: "1".into(),
            name: "Beef Stew".into(),
            category: "Beef".into(),
            area: "British".into(),
            instructions: "Brown the beef.\nSimmer for two hours.".into(),
            thumbnail: String::new(),
            video: Some("https://youtu.be/x".into()),
            ingredients: vec![Ingredient::new("Beef", "500g"), Ingredient::new("Salt", "")],
        }
    }

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn lists_ingredients_and_instruction_lines() {
        let theme = Theme::load_default();
        let r = recipe();
        let view = RecipeView::new(&r, 0, &theme);
        let rendered = text(&view.lines());
        assert_eq!(rendered[0], "Beef  ·  British");
        assert!(rendered.contains(&"  • 500g Beef".to_string()));
        assert!(rendered.contains(&"  • Salt".to_string()));
        assert!(rendered.contains(&"Video  https://youtu.be/x".to_string()));
        assert_eq!(rendered.last().map(String::as_str), Some("Simmer for two hours."));
    }

    #[test]
    fn renders_into_a_buffer() {
        let theme = Theme::load_default();
        let r = recipe();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        RecipeView::new(&r, 0, &theme).popup().render(area, &mut buf);
        let top: String = (0..area.width)
            .map(|x| buf[(x, 2)].symbol().to_string())
            .collect();
        assert!(top.contains("Beef Stew"));
    }
}
