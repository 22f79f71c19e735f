use once_cell::sync::Lazy;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::app::app_state::Focus;

pub static INPUT_BINDINGS: Lazy<Vec<KeyBinding>> = Lazy::new(|| {
    vec![
        KeyBinding::new("Enter", "Add"),
        KeyBinding::new("Tab", "List"),
        KeyBinding::new("Ctrl+c", "Clear"),
        KeyBinding::new("Ctrl+q", "Quit"),
    ]
});

pub static LIST_BINDINGS: Lazy<Vec<KeyBinding>> = Lazy::new(|| {
    vec![
        KeyBinding::new("↑/k/↓/j", "Move"),
        KeyBinding::new("Space", "Toggle"),
        KeyBinding::new("e", "Edit"),
        KeyBinding::new("d", "Delete"),
        KeyBinding::new("r", "Reload"),
        KeyBinding::new("Tab", "Input"),
        KeyBinding::new("Ctrl+q", "Quit"),
    ]
});

pub struct KeyBinding {
    key: &'static str,
    description: &'static str,
}

impl KeyBinding {
    fn new(key: &'static str, description: &'static str) -> Self {
        Self { key, description }
    }

    pub fn key(&self) -> &str {
        self.key
    }

    pub fn description(&self) -> &str {
        self.description
    }
}

pub fn help_line<'a>(focus: Focus) -> Line<'a> {
    let bindings = match focus {
        Focus::Input => &*INPUT_BINDINGS,
        Focus::List => &*LIST_BINDINGS,
    };

    let mut spans: Vec<Span<'a>> = bindings
        .iter()
        .flat_map(|b| {
            vec![
                Span::styled(
                    b.key().to_string(),
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                ),
                " ".into(),
                Span::styled(b.description().to_string(), Style::default().fg(Color::White)),
                " | ".into(),
            ]
        })
        .collect();
    spans.pop(); // trailing separator

    Line::from(spans)
}

pub fn render_help_line(frame: &mut Frame, area: Rect, focus: Focus) {
    frame.render_widget(help_line(focus), area);
}
