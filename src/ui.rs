use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    Frame,
};

use crate::app::Snapshot;
use crate::components::header::HeaderWidget;
use crate::components::listing::{ListingState, ListingWidget};
use crate::components::status_bar::StatusBarWidget;
use crate::error::Result;
use crate::theme::RenderConfig;
use crate::tui::Tui;

/// Something that can show a navigation snapshot.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<()>;
}

/// Render the browser screen.
pub fn render(
    frame: &mut Frame,
    snapshot: &Snapshot<'_>,
    config: &RenderConfig,
    listing: &mut ListingState,
) {
    let [header, body, count, status] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(HeaderWidget::new(snapshot.current_path, config), header);

    listing.update_scroll(snapshot.cursor, body.height as usize);
    frame.render_widget(
        ListingWidget::new(snapshot.entries, snapshot.cursor, listing, config),
        body,
    );

    let count_line = Line::from(Span::styled(
        format!(" {} items in there.", snapshot.entries.len()),
        Style::default().fg(config.colors.count_fg),
    ));
    frame.render_widget(count_line, count);

    frame.render_widget(
        StatusBarWidget::new(snapshot.info_text, &config.colors).signal(snapshot.last_signal),
        status,
    );
}

/// [`Renderer`] drawing to the real terminal.
pub struct TerminalRenderer {
    tui: Tui,
    config: RenderConfig,
    listing: ListingState,
}

impl TerminalRenderer {
    pub fn new(tui: Tui, config: RenderConfig) -> Self {
        Self {
            tui,
            config,
            listing: ListingState::default(),
        }
    }

    /// Leave raw mode and the alternate screen.
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<()> {
        let Self {
            tui,
            config,
            listing,
        } = self;
        tui.terminal_mut()
            .draw(|frame| render(frame, snapshot, config, listing))?;
        Ok(())
    }
}
