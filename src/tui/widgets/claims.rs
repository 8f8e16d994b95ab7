//! Claims review table with the decision column and comment line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState as ViewState};

use crate::model::Claim;
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::tui::table::TableRow;

pub fn render_claims(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

    let table = &state.claims;

    let mut headers = Claim::headers();
    headers.push("DECISION");
    let header = Row::new(headers.iter().enumerate().map(|(i, h)| {
        let mut text = format!(" {h}");
        if i == table.sort_column {
            text.push(if table.sort_ascending { '▲' } else { '▼' });
        }
        Cell::from(text)
    }))
    .style(Styles::table_header());

    let rows = table.visible_items().into_iter().map(|claim| {
        let review = state.review_of(claim);
        let mut cells: Vec<Cell> = claim
            .cells()
            .into_iter()
            .map(|c| Cell::from(format!(" {c}")))
            .collect();
        cells.push(Cell::from(format!(" {}", review.decision.name())));
        Row::new(cells)
    });

    let widths = [
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(20),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Min(10),
    ];

    let title = format!(" Claims ({}/{}) ", table.visible_len(), table.items.len());
    let widget = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Styles::selected())
        .block(Block::default().borders(Borders::ALL).title(title));

    let mut view = ViewState::default();
    view.select(Some(table.selected));
    f.render_stateful_widget(widget, chunks[0], &mut view);

    render_comment_line(f, state, chunks[1]);
}

/// Comment entry for the selected claim. Only shown once the claim is
/// approved or rejected, mirroring when the comment applies at all.
fn render_comment_line(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(claim) = state.claims.selected_item() else {
        return;
    };
    let review = state.review_of(claim);
    if !review.decision.comment_visible() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " a approve  x reject  Enter details",
                Styles::dim(),
            ))),
            area,
        );
        return;
    }

    let (style, cursor) = if state.editing_comment {
        (Styles::field_active(), "_")
    } else {
        (Styles::default(), "")
    };
    let line = Line::from(vec![
        Span::styled(" Comment: ", Styles::dim()),
        Span::styled(format!("{}{cursor}", review.comment), style),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
