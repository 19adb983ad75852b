use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::form::{FormField, HostForm};

const INPUT_HEIGHT: u16 = 3;
const ERROR_HEIGHT: u16 = 1;

/// Draws every field top to bottom and returns the input box of each one.
pub fn render_fields(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &HostForm,
    enable_cursor: bool,
) -> Vec<Rect> {
    if form.is_empty() {
        let placeholder =
            Paragraph::new("This form has no fields").block(Block::default().borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return Vec::new();
    }

    let bottom = area.y.saturating_add(area.height);
    let mut inputs = Vec::with_capacity(form.len());
    let mut y = area.y;
    for (index, field) in form.fields().iter().enumerate() {
        if y.saturating_add(INPUT_HEIGHT) > bottom {
            break;
        }
        let input_area = Rect::new(area.x, y, area.width, INPUT_HEIGHT);
        let focused = index == form.focus_index();
        render_input(frame, input_area, field, focused, enable_cursor);
        y = y.saturating_add(INPUT_HEIGHT);

        if y < bottom {
            if let Some(message) = field.error_message() {
                let error_area = Rect::new(area.x.saturating_add(1), y, area.width, ERROR_HEIGHT);
                let error = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)));
                frame.render_widget(error, error_area);
            }
            y = y.saturating_add(ERROR_HEIGHT);
        }
        inputs.push(input_area);
    }
    inputs
}

fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    field: &FormField,
    focused: bool,
    enable_cursor: bool,
) {
    let control = field.control();
    let mut title = field.label().to_string();
    if control.is_required() || field.slot().is_required() {
        title.push_str(" *");
    }
    if control.is_disabled() {
        title.push_str(" (disabled)");
    }

    let border_style = if control.is_disabled() {
        Style::default().fg(Color::DarkGray)
    } else if field.error_message().is_some() {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let title_style = if focused {
        border_style.add_modifier(Modifier::BOLD)
    } else {
        border_style
    };

    let text = control.display_text();
    let line = if text.is_empty() {
        Line::from(Span::styled(
            control.placeholder().to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else if control.is_disabled() {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(text.to_string())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, title_style));
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && enable_cursor && !control.is_disabled() {
        let width = text.width() as u16;
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        let cursor_x = area.x.saturating_add(1).saturating_add(width).min(max_x);
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}
