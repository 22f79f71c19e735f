use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use ratatui_macros::span;

const SPINNER: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

/// Placeholder drawn over the list while the collection is being fetched.
#[derive(Default)]
pub struct Loading {
    frame: usize,
}

impl Loading {
    /// Advances the spinner by one frame.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER.len();
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            span!(Color::LightMagenta; "{}", SPINNER[self.frame]),
            " Loading todos...".italic().gray(),
        ]);
        f.render_widget(
            Paragraph::new(line).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
            area,
        );
    }
}
