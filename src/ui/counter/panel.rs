//! Single-line counter panel with the amount input inline.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::counter::CounterState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

const HINTS: &str = "[r] +Random  [o] +Next Odd  [d] -Amount  [c] Reset";

/// Render the counter panel.
///
/// When `focused` the amount field owns the terminal cursor, placed right
/// after the typed digits.
pub fn render_counter_panel(
    frame: &mut Frame,
    area: Rect,
    state: &CounterState,
    amount_input: &str,
    focused: bool,
) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);
    let value_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let amount_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        text_style
    };

    let line = Line::from(vec![
        Span::styled(" Count: ", text_style),
        Span::styled(state.value.to_string(), value_style),
        Span::styled("  │  Amount: ", separator_style),
        Span::styled(amount_input.to_string(), amount_style),
        Span::styled("  │  ", separator_style),
        Span::styled(HINTS, Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)),
    ]);

    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Counter ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);

    if focused {
        let offset = amount_cursor_offset(state.value, amount_input);
        frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

/// Columns from the panel's inner left edge to just past the typed amount.
///
/// Counted in chars, not bytes, to survive any non-ASCII input.
fn amount_cursor_offset(value: u64, amount_input: &str) -> u16 {
    let prefix = format!(" Count: {}  │  Amount: ", value);
    (prefix.chars().count() + amount_input.chars().count()) as u16
}
