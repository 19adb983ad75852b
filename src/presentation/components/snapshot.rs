use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::Snapshot;

pub fn snapshot_height(snapshot: &Snapshot) -> u16 {
    // `{`, one line per field, `}` and the borders
    (snapshot.len() as u16).saturating_add(4)
}

pub fn render_snapshot(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) {
    let body = serde_json::to_string_pretty(snapshot).unwrap_or_else(|err| err.to_string());
    let widget = Paragraph::new(body)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .title("Submitted value")
                .borders(Borders::ALL),
        );
    frame.render_widget(widget, area);
}
