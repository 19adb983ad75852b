use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

use crate::form::HostForm;

use super::components::{
    render_fields, render_footer, render_snapshot, render_suggestions, snapshot_height,
    suggestions_visible,
};

pub struct UiContext<'a> {
    pub form: &'a HostForm,
    pub status_message: &'a str,
    pub dirty: bool,
    pub error_count: usize,
    pub help: Option<&'a str>,
    pub show_snapshot: bool,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let snapshot = ctx
        .form
        .last_submitted()
        .filter(|_| ctx.show_snapshot);

    let mut constraints = Vec::new();
    if ctx.form.title().is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(4));
    if let Some(snapshot) = snapshot {
        constraints.push(Constraint::Length(snapshot_height(snapshot)));
    }
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut index = 0;
    if let Some(title) = ctx.form.title() {
        let heading = Paragraph::new(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(heading, chunks[index]);
        index += 1;
    }

    let body = chunks[index];
    let inputs = render_fields(frame, body, ctx.form, true);
    index += 1;

    if let Some(snapshot) = snapshot {
        render_snapshot(frame, chunks[index], snapshot);
        index += 1;
    }
    render_footer(frame, chunks[index], &ctx);

    // drawn last so the panel covers the fields below the focused one
    if let (Some(field), Some(anchor)) =
        (ctx.form.focused(), inputs.get(ctx.form.focus_index()))
        && suggestions_visible(field.control())
    {
        render_suggestions(frame, *anchor, body, field.control());
    }
}
