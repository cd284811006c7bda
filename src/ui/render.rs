use crate::ui::app::{App, Focus};
use crate::ui::counter::render_counter_panel;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::roster::render_card_grid;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);

    let header = Header::new();
    frame.render_widget(
        header.widget(app.roster().active_count(), app.roster().removed_count()),
        regions.header,
    );

    render_counter_panel(
        frame,
        regions.counter,
        app.counter(),
        app.amount_input(),
        app.focus() == Focus::Amount,
    );

    render_search_box(frame, regions.search, app);

    render_card_grid(frame, regions.body, app.roster());

    let footer = Footer::new();
    frame.render_widget(footer.widget(regions.footer, app.focus()), regions.footer);
}

fn render_search_box(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Search;
    let query = app.roster().query.as_str();

    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(query.to_string(), Style::default().fg(HEADER_TEXT)),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Search username ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);

    if focused {
        // Border plus leading space, then the typed query
        let x = area.x + 2 + query.chars().count() as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}
