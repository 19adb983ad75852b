use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use crate::form::{ControlState, SlotControl};

use super::layout::dropdown_rect;

const LOADING_LABEL: &str = "Loading options…";
const EMPTY_LABEL: &str = "No matches";

/// The panel opens on typing or arrow keys and closes once a value is picked or cleared.
pub fn suggestions_visible(control: &SlotControl) -> bool {
    control.state() == ControlState::Filtering
}

pub fn render_suggestions(frame: &mut Frame<'_>, anchor: Rect, bounds: Rect, control: &SlotControl) {
    let selectors = control.selectors();
    let mut items: Vec<ListItem<'static>> = Vec::new();
    if control.is_loading() {
        items.push(ListItem::new(LOADING_LABEL).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    let offset = items.len();
    items.extend(
        control
            .filtered()
            .map(|option| ListItem::new(selectors.display_of(option).into_owned())),
    );
    let has_matches = items.len() > offset;
    if !has_matches && !control.is_loading() {
        items.push(ListItem::new(EMPTY_LABEL).style(Style::default().fg(Color::DarkGray)));
    }

    let height = (items.len() as u16).saturating_add(2);
    let Some(area) = dropdown_rect(anchor, bounds, height) else {
        return;
    };
    frame.render_widget(Clear, area);

    let mut state = ListState::default();
    if has_matches {
        state.select(Some(offset + control.highlight_index()));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut state);
}
