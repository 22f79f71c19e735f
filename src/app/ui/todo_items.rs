#[cfg(test)]
#[path = "todo_items_test.rs"]
mod tests;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Padding, Paragraph},
};

use crate::{app::app_state::AppState, models::Todo};

use super::utils;

const CHECKBOX_WIDTH: usize = 4;

pub struct TodoItems {
    state: ListState,
}

impl TodoItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, app_state: &AppState, focused: bool) {
        let border = if focused {
            Color::LightMagenta
        } else {
            Color::DarkGray
        };
        let todos = app_state.todos.todos();
        let done = todos.iter().filter(|t| t.done()).count();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(Line::from(" Todos ").bold())
            .title(Line::from(format!(" {done}/{} done ", todos.len())).right_aligned())
            .padding(Padding::symmetric(1, 0));

        if todos.is_empty() {
            f.render_widget(
                Paragraph::new("Nothing to do. Add a task below!".italic().gray())
                    .alignment(Alignment::Center)
                    .block(block),
                area,
            );
            return;
        }

        let max_width = (area.width as usize).saturating_sub(4);
        let items = todos
            .iter()
            .map(|todo| {
                let marker = if app_state.todos.is_saving(todo.id) {
                    RowMarker::Saving
                } else if app_state.todos.is_editing(todo.id) {
                    RowMarker::Editing
                } else {
                    RowMarker::None
                };
                ListItem::new(build_line(todo, max_width, marker))
            })
            .collect::<Vec<_>>();

        let highlight = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);

        self.state.select(app_state.cursor());
        f.render_stateful_widget(list, area, &mut self.state);
    }
}

impl Default for TodoItems {
    fn default() -> Self {
        Self {
            state: ListState::default(),
        }
    }
}

/// Trailing note on a row whose text is being changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowMarker {
    None,
    Editing,
    Saving,
}

pub(crate) fn build_line<'a>(todo: &Todo, max_width: usize, marker: RowMarker) -> Line<'a> {
    let checkbox = if todo.done() {
        Span::styled("[x] ", Style::default().fg(Color::LightGreen))
    } else {
        Span::raw("[ ] ")
    };

    let suffix = match marker {
        RowMarker::None => "",
        RowMarker::Editing => " (editing)",
        RowMarker::Saving => " (saving…)",
    };
    let text_width = max_width.saturating_sub(CHECKBOX_WIDTH + suffix.chars().count());
    let text = utils::truncate(&todo.task, text_width);

    let text = if todo.done() {
        Span::styled(
            text,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        Span::raw(text)
    };

    Line::from(vec![checkbox, text, suffix.dark_gray().italic()])
}
