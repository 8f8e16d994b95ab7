//! Top header bar: title, tabs, mode indicator.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode, Tab};
use crate::tui::style::Styles;

pub fn render_header(f: &mut Frame, state: &AppState, area: Rect) {
    let mut spans = vec![Span::styled(" acornhr ", Styles::header()), Span::raw(" ")];

    for tab in [Tab::Employees, Tab::Claims] {
        let style = if tab == state.current_tab {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(format!(" {} ", tab.name()), style));
    }

    match state.input_mode {
        InputMode::Filter => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("filter: {}_", state.filter_input),
                Styles::field_active(),
            ));
        }
        InputMode::Normal => {
            let table = match state.current_tab {
                Tab::Employees => &state.employees.filter,
                Tab::Claims => &state.claims.filter,
            };
            if let Some(filter) = table {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(format!("filter: {filter}"), Styles::dim()));
            }
        }
    }

    let mode = if state.is_live { "LIVE" } else { "SAMPLE" };
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let pad = (area.width as usize).saturating_sub(used + mode.len() + 1);
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(mode, Styles::dim()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
