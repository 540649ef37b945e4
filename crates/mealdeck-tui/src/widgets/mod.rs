//! Ratatui widgets for the mealdeck TUI.

pub mod command_bar;
pub mod confirm;
pub mod filter_panel;
pub mod help;
pub mod nav_bar;
pub mod query_bar;
pub mod recipe_form;
pub mod recipe_list;
pub mod recipe_view;
