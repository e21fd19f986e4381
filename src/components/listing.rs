use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use humansize::{format_size, BINARY};

use crate::fs::entry::DirectoryEntry;
use crate::theme::RenderConfig;

/// Scroll position of the listing, kept across frames.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListingState {
    pub scroll_offset: usize,
}

impl ListingState {
    /// Update the scroll offset to ensure the cursor row is visible.
    pub fn update_scroll(&mut self, cursor: usize, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
        } else if cursor >= self.scroll_offset + visible_height {
            self.scroll_offset = cursor - visible_height + 1;
        }
    }
}

/// Renders one directory listing, one entry per row, with a cursor marker.
pub struct ListingWidget<'a> {
    entries: &'a [DirectoryEntry],
    cursor: usize,
    scroll_offset: usize,
    config: &'a RenderConfig,
}

impl<'a> ListingWidget<'a> {
    pub fn new(
        entries: &'a [DirectoryEntry],
        cursor: usize,
        state: &ListingState,
        config: &'a RenderConfig,
    ) -> Self {
        Self {
            entries,
            cursor,
            scroll_offset: state.scroll_offset,
            config,
        }
    }

    fn indicator(&self, entry: &DirectoryEntry) -> &'static str {
        match (self.config.use_icons, entry.is_directory, entry.is_symlink) {
            (true, true, _) => "📁 ",
            (true, false, true) => "🔗 ",
            (true, false, false) => "📄 ",
            (false, true, _) => "[D] ",
            (false, false, true) => "[L] ",
            (false, false, false) => "[F] ",
        }
    }

    fn entry_style(&self, entry: &DirectoryEntry, is_selected: bool) -> Style {
        let colors = &self.config.colors;
        if is_selected {
            Style::default()
                .fg(colors.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else if entry.is_hidden() {
            Style::default().fg(colors.hidden_fg)
        } else if entry.is_directory {
            Style::default()
                .fg(colors.dir_fg)
                .add_modifier(Modifier::BOLD)
        } else if entry.is_symlink {
            Style::default().fg(colors.symlink_fg)
        } else {
            Style::default().fg(colors.file_fg)
        }
    }
}

impl<'a> Widget for ListingWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.entries.is_empty() {
            let style = Style::default()
                .fg(self.config.colors.hidden_fg)
                .add_modifier(Modifier::ITALIC);
            let line = Line::from(Span::styled("  (empty directory)", style));
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        let visible = self
            .entries
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(area.height as usize);

        for (row, (idx, entry)) in visible.enumerate() {
            let is_selected = idx == self.cursor;
            let marker = if is_selected { "> " } else { "  " };
            let marker_style = Style::default()
                .fg(self.config.colors.selected_fg)
                .add_modifier(Modifier::BOLD);

            let line = Line::from(vec![
                Span::styled(marker, marker_style),
                Span::raw(self.indicator(entry)),
                Span::styled(entry.display_name(), self.entry_style(entry, is_selected)),
            ]);
            let y = area.y + row as u16;
            buf.set_line(area.x, y, &line, area.width);

            // Right-aligned size for files, when it fits beside the name.
            let size = entry
                .meta
                .as_ref()
                .filter(|_| !entry.is_directory)
                .map(|meta| format_size(meta.size, BINARY));
            if let Some(size) = size {
                if line.width() + size.len() + 2 <= area.width as usize {
                    let x = area.x + area.width - size.len() as u16 - 1;
                    let style = Style::default().fg(self.config.colors.count_fg);
                    buf.set_string(x, y, &size, style);
                }
            }
        }
    }
}
