use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen bands, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub counter: Rect,
    pub search: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let bands = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    Regions {
        header: bands[0],
        counter: bands[1],
        search: bands[2],
        body: bands[3],
        footer: bands[4],
    }
}
