//! Employees table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState as ViewState};

use crate::model::Employee;
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::tui::table::TableRow;

pub fn render_employees(f: &mut Frame, state: &AppState, area: Rect) {
    let table = &state.employees;

    let header = Row::new(Employee::headers().iter().enumerate().map(|(i, h)| {
        let mut text = format!(" {h}");
        if i == table.sort_column {
            text.push(if table.sort_ascending { '▲' } else { '▼' });
        }
        Cell::from(text)
    }))
    .style(Styles::table_header());

    let rows = table
        .visible_items()
        .into_iter()
        .map(|e| Row::new(e.cells().into_iter().map(|c| Cell::from(format!(" {c}")))));

    let widths = [
        Constraint::Length(9),
        Constraint::Length(22),
        Constraint::Length(30),
        Constraint::Length(12),
        Constraint::Min(12),
    ];

    let title = format!(" Employees ({}/{}) ", table.visible_len(), table.items.len());
    let widget = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Styles::selected())
        .block(Block::default().borders(Borders::ALL).title(title));

    let mut view = ViewState::default();
    view.select(Some(table.selected));
    f.render_stateful_widget(widget, area, &mut view);
}
