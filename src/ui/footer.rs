use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom bar showing key hints for the focused pane, version on the right.
pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, focus: Focus) -> Paragraph<'static> {
        let hints = hints_for(focus);
        let version = format!("v{} ", VERSION);

        // Pad by char count so the version hugs the right border.
        let inner = area.width.saturating_sub(2) as usize;
        let padding = inner
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        Paragraph::new(Line::from(vec![
            Span::styled(hints, dim),
            Span::raw(" ".repeat(padding)),
            Span::styled(version, dim),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn hints_for(focus: Focus) -> &'static str {
    match focus {
        Focus::Roster => " j/k: Select │ Enter: Remove/Restore │ /: Search │ n: Amount │ q: Quit",
        Focus::Search => " Type to filter usernames │ Backspace: Delete │ Enter/Esc: Back",
        Focus::Amount => " Type the decrement amount │ Backspace: Delete │ Enter/Esc: Back",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_focus_names_its_way_back() {
        assert!(hints_for(Focus::Roster).contains("q: Quit"));
        assert!(hints_for(Focus::Search).contains("Esc: Back"));
        assert!(hints_for(Focus::Amount).contains("Esc: Back"));
    }
}
