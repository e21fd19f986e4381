use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::keymap::{self, Command};
use crate::theme::RenderConfig;

/// Title, key hints and the current path, on the first and third rows.
pub struct HeaderWidget<'a> {
    path: &'a Path,
    config: &'a RenderConfig,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(path: &'a Path, config: &'a RenderConfig) -> Self {
        Self { path, config }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let colors = &self.config.colors;

        let title_style = Style::default()
            .bg(colors.title_bg)
            .fg(colors.title_fg)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![Span::styled(" fb ", title_style)];
        if self.config.show_hints {
            let hints = keymap::hint_line(&[Command::Quit, Command::Enter, Command::Leave]);
            spans.push(Span::styled(
                format!(" ({hints})"),
                Style::default().fg(colors.hint_fg),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        if area.height < 3 {
            return;
        }
        let pin = if self.config.use_icons { " 📍 " } else { " " };
        let path_line = Line::from(Span::styled(
            format!("{pin}{}", self.path.display()),
            Style::default().fg(colors.path_fg),
        ));
        buf.set_line(area.x, area.y + 2, &path_line, area.width);
    }
}
