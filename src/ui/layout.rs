use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into controls (top), history (fills) and shortcut hint (bottom).
pub fn body_sections(body: Rect) -> (Rect, Rect, Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(body);
    (sections[0], sections[1], sections[2])
}

/// Count line, blank, buttons, blank, step field, save hint.
pub const CONTROLS_HEIGHT: u16 = 6;
