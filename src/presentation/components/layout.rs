use ratatui::layout::Rect;

/// Area directly under `anchor`, clipped to `bounds`; `None` when too short to draw a list.
pub fn dropdown_rect(anchor: Rect, bounds: Rect, height: u16) -> Option<Rect> {
    let top = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);
    let available = bottom.saturating_sub(top);
    let height = height.min(available);
    if height < 3 {
        return None;
    }
    let left = anchor.x.max(bounds.x);
    let right = anchor
        .x
        .saturating_add(anchor.width)
        .min(bounds.x.saturating_add(bounds.width));
    Some(Rect::new(left, top, right.saturating_sub(left), height))
}
