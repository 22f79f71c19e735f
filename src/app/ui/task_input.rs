use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Padding},
};
use tui_textarea::{Input, TextArea};

/// Single-line box where new tasks are typed.
pub struct TaskInput<'a> {
    textarea: TextArea<'a>,
    focused: bool,
}

impl TaskInput<'_> {
    pub fn new() -> Self {
        let mut input = Self {
            textarea: TextArea::default(),
            focused: true,
        };
        input.restyle();
        input
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join(" ")
    }

    pub fn input(&mut self, input: Input) {
        self.textarea.input(input);
    }

    pub fn paste(&mut self, text: &str) {
        self.textarea.insert_str(text.replace(['\r', '\n'], " "));
    }

    pub fn clear(&mut self) {
        self.textarea = TextArea::default();
        self.restyle();
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
        self.restyle();
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(&self.textarea, area);
    }

    fn restyle(&mut self) {
        let border = if self.focused {
            Color::LightMagenta
        } else {
            Color::DarkGray
        };
        self.textarea.set_block(
            Block::default()
                .title(" New task ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .padding(Padding::horizontal(1)),
        );
        self.textarea.set_cursor_line_style(Style::default());
        // Hide the cursor while the list has focus
        let cursor = if self.focused {
            Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor);
        self.textarea.set_placeholder_text("Add a new task...");
    }
}

impl Default for TaskInput<'_> {
    fn default() -> Self {
        Self::new()
    }
}
