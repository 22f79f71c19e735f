use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use crate::{config::constants::NOTICE_DURATION, models::NoticeMessage};

use super::utils;

/// Transient messages stacked in the top-right corner, oldest first.
pub struct Notice {
    notices: Vec<(NoticeMessage, Instant)>,
    default_ttl: Duration,
}

impl Notice {
    pub fn add_message(&mut self, msg: NoticeMessage) {
        self.notices.push((msg, Instant::now()));
    }

    fn prune(&mut self, now: Instant) {
        let default_ttl = self.default_ttl;
        self.notices.retain(|(msg, shown_at)| {
            now.duration_since(*shown_at) < msg.ttl().unwrap_or(default_ttl)
        });
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.prune(Instant::now());
        // Borders and padding take four columns
        if area.width < 8 || area.height < 3 {
            return;
        }
        let text_width = (area.width - 4) as usize;

        let mut y = area.y;
        for (msg, _) in &self.notices {
            let lines = utils::wrap_words(msg.text(), text_width);
            let height = lines.len() as u16 + 2;
            if y + height > area.y + area.height {
                break;
            }

            let kind = msg.kind();
            let rect = Rect::new(area.x, y, area.width, height);
            f.render_widget(Clear, rect);
            f.render_widget(
                Paragraph::new(lines.join("\n"))
                    .style(Style::default().fg(kind.text_color()))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(kind.border_color()))
                            .padding(Padding::horizontal(1)),
                    ),
                rect,
            );
            y += height;
        }
    }
}

impl Default for Notice {
    fn default() -> Self {
        Self {
            notices: vec![],
            default_ttl: NOTICE_DURATION,
        }
    }
}
