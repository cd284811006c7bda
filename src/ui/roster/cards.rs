//! Card grid rendering for the roster.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::roster::state::{RosterEntry, RosterState};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 7;

/// Render the visible entries as a grid of cards.
///
/// Removed entries get a red border, mirroring their parked status. The
/// grid scrolls by whole rows to keep the selected card on screen.
pub fn render_card_grid(frame: &mut Frame, area: Rect, state: &RosterState) {
    let visible = state.visible();

    let block = Block::default()
        .title(" Users ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if visible.is_empty() {
        let message = if state.query.is_empty() {
            "Roster is empty"
        } else {
            "No usernames match"
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
        return;
    }

    let columns = grid_columns(inner.width);
    let visible_rows = (inner.height / CARD_HEIGHT) as usize;
    if visible_rows == 0 {
        return;
    }
    let first_row = first_visible_row(state.selected, columns, visible_rows);

    for (index, entry) in visible.iter().enumerate() {
        let row = index / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }

        let col = (index % columns) as u16;
        let x = inner.x + col * CARD_WIDTH;
        let y = inner.y + ((row - first_row) as u16) * CARD_HEIGHT;
        let width = CARD_WIDTH.min(inner.right().saturating_sub(x));
        if width < 4 {
            continue;
        }

        let rect = Rect::new(x, y, width, CARD_HEIGHT);
        render_card(frame, rect, entry, index == state.selected);
    }
}

fn render_card(frame: &mut Frame, area: Rect, entry: &RosterEntry, selected: bool) {
    let border_color = if entry.is_removed() {
        STATUS_ERROR
    } else if selected {
        ACCENT
    } else {
        GLOBAL_BORDER
    };
    let mut border_style = Style::default().fg(border_color);
    if selected {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }

    let text_style = Style::default().fg(HEADER_TEXT);
    let action_style = if entry.is_removed() {
        Style::default().fg(STATUS_OK)
    } else {
        Style::default().fg(STATUS_ERROR)
    };

    let user = &entry.user;
    let lines = vec![
        Line::from(Span::styled(
            user.username.clone(),
            text_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("Age: {}", user.age), text_style)),
        Line::from(Span::styled(
            format!("Company: {}", user.company_name),
            text_style,
        )),
        Line::from(Span::styled(
            format!("Address: {}, {}", user.address.street, user.address.city),
            text_style,
        )),
        Line::from(Span::styled(
            format!("[Enter] {}", action_label(entry)),
            action_style,
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

fn action_label(entry: &RosterEntry) -> &'static str {
    if entry.is_removed() {
        "Restore"
    } else {
        "Remove"
    }
}

/// Cards per row for the given inner width, never zero.
fn grid_columns(width: u16) -> usize {
    ((width / CARD_WIDTH) as usize).max(1)
}

/// First grid row to draw so the selected card stays visible.
fn first_visible_row(selected: usize, columns: usize, visible_rows: usize) -> usize {
    let selected_row = selected / columns;
    if selected_row < visible_rows {
        0
    } else {
        selected_row - visible_rows + 1
    }
}
