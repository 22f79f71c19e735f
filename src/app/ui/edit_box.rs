use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Padding},
};
use tui_textarea::{CursorMove, TextArea};

use crate::models::{Event, Todo, TodoId};

/// Popup editor for the text of one todo. Closing it always yields the draft;
/// there is no way to discard it.
#[derive(Default)]
pub struct EditBox<'a> {
    editing: Option<TodoId>,
    input: TextArea<'a>,
}

impl<'a> EditBox<'a> {
    pub fn showing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn open(&mut self, todo: &Todo) {
        let mut input = TextArea::new(vec![todo.task.clone()]);
        input.set_block(
            Block::default()
                .title(Line::from(format!(" Edit #{} ", todo.id)).bold())
                .title_bottom(Line::from(" Enter/Esc to save ").gray())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::LightMagenta))
                .padding(Padding::symmetric(1, 0)),
        );
        input.set_cursor_line_style(Style::default());
        input.set_placeholder_text("Task description");
        input.move_cursor(CursorMove::End);

        self.input = input;
        self.editing = Some(todo.id);
    }

    /// Hides the popup and returns the id being edited with the final draft.
    pub fn close(&mut self) -> Option<(TodoId, String)> {
        let id = self.editing.take()?;
        Some((id, self.input.lines().join(" ")))
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if !self.showing() {
            return;
        }
        f.render_widget(Clear, area);
        f.render_widget(&self.input, area);
    }

    pub fn handle_key_event(&mut self, event: Event) {
        match event {
            Event::KeyboardCharInput(input) => {
                self.input.input(input);
            }
            Event::KeyboardPaste(text) => {
                self.input.insert_str(text.replace(['\r', '\n'], " "));
            }
            _ => {}
        }
    }
}
