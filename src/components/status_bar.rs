use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::nav::signal::Signal;
use crate::theme::ThemeColors;

/// Bottom bar: the last navigation signal if there is one, otherwise the
/// selected entry's info line.
pub struct StatusBarWidget<'a> {
    info_text: Option<&'a str>,
    signal: Option<&'a Signal>,
    theme: &'a ThemeColors,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(info_text: Option<&'a str>, theme: &'a ThemeColors) -> Self {
        Self {
            info_text,
            signal: None,
            theme,
        }
    }

    pub fn signal(mut self, signal: Option<&'a Signal>) -> Self {
        self.signal = signal;
        self
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let (text, style) = match self.signal {
            Some(signal) => {
                let fg = if signal.is_error() {
                    self.theme.error_fg
                } else {
                    self.theme.warning_fg
                };
                (
                    format!(" {signal}"),
                    Style::default()
                        .bg(self.theme.info_bg)
                        .fg(fg)
                        .add_modifier(Modifier::BOLD),
                )
            }
            None => (
                format!(" {}", self.info_text.unwrap_or("")),
                Style::default().bg(self.theme.info_bg).fg(self.theme.info_fg),
            ),
        };

        // Fill the whole row first; set_line truncates by display width.
        let row = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(row, style);
        let line = Line::from(Span::styled(text, style));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use std::io;
    use std::path::PathBuf;

    fn content(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn shows_info_text() {
        let tc = theme::dark_theme();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(Some("Size: 5 bytes | Mod: 2024-01-01 10:00"), &tc)
            .render(area, &mut buf);

        assert!(content(&buf).contains("Size: 5 bytes"));
        let last = buf.cell((59, 0)).unwrap();
        assert_eq!(last.bg, tc.info_bg);
    }

    #[test]
    fn signal_replaces_info_text() {
        let tc = theme::dark_theme();
        let signal = Signal::AtRoot;
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(Some("Size: 5 bytes"), &tc)
            .signal(Some(&signal))
            .render(area, &mut buf);

        let text = content(&buf);
        assert!(text.contains("Already at the root directory"));
        assert!(!text.contains("Size"));
        assert_eq!(buf.cell((1, 0)).unwrap().fg, tc.warning_fg);
    }

    #[test]
    fn unreadable_signal_uses_error_color() {
        let tc = theme::dark_theme();
        let signal = Signal::DirectoryUnreadable {
            path: PathBuf::from("/root"),
            cause: io::ErrorKind::PermissionDenied,
        };
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(None, &tc)
            .signal(Some(&signal))
            .render(area, &mut buf);

        assert!(content(&buf).contains("Cannot open /root: permission denied"));
        assert_eq!(buf.cell((1, 0)).unwrap().fg, tc.error_fg);
    }

    #[test]
    fn background_fills_row_regardless_of_character_width() {
        let tc = theme::dark_theme();
        let area = Rect::new(0, 0, 30, 1);

        // Combining accents: more chars than columns.
        let accented = "e\u{301}".repeat(10);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(Some(&accented), &tc).render(area, &mut buf);
        assert_eq!(buf.cell((29, 0)).unwrap().bg, tc.info_bg);

        // Wide glyphs: more columns than chars.
        let wide = "文件".repeat(10);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(Some(&wide), &tc).render(area, &mut buf);
        assert!(content(&buf).starts_with(" 文"));
        assert_eq!(buf.cell((29, 0)).unwrap().bg, tc.info_bg);
    }

    #[test]
    fn narrow_area_truncates() {
        let tc = theme::dark_theme();
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(Some("Size: 123456789 bytes"), &tc).render(area, &mut buf);
        assert_eq!(content(&buf), " Size: 1");
    }

    #[test]
    fn zero_area_does_not_panic() {
        let tc = theme::dark_theme();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(None, &tc).render(area, &mut buf);
    }
}
