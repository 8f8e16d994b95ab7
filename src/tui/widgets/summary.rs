//! Dashboard strip: month progress gauge and employee headcount.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::{Styles, Theme};

pub fn render_summary(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(area);

    let month = &state.month;
    let text = vec![
        Line::raw(""),
        Line::from(format!(
            " {}: {} days elapsed, {} remaining",
            month.month_name, month.elapsed_days, month.remaining_days
        )),
        Line::from(format!(" Employees: {}", state.employee_count.text())),
    ];
    f.render_widget(Paragraph::new(text).style(Styles::default()), chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", month.month_name)),
        )
        .gauge_style(Style::default().fg(Theme::GAUGE))
        .ratio(month.ratio())
        .label(format!("{}/{} days", month.elapsed_days, month.total_days));
    f.render_widget(gauge, chunks[1]);
}
