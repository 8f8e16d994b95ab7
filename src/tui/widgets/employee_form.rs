//! Employee registration form popup.

use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::state::{EmployeeFormState, FieldKind};
use crate::tui::style::Styles;

use super::common::centered_box;

pub fn render_employee_form(f: &mut Frame, form: &EmployeeFormState) {
    let height = form.fields.len() as u16 + 4;
    let area = centered_box(52, height, f.area());
    f.render_widget(Clear, area);

    let mut lines = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let active = i == form.active;
        let display = match field.kind {
            FieldKind::Secret => "*".repeat(field.value.chars().count()),
            FieldKind::Select(_) => format!("< {} >", field.value),
            FieldKind::Text => field.value.clone(),
        };
        let cursor = if active && !matches!(field.kind, FieldKind::Select(_)) {
            "_"
        } else {
            ""
        };
        let style = if active {
            Styles::field_active()
        } else {
            Styles::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<18}", field.label), Styles::dim()),
            Span::styled(format!("{display}{cursor}"), style),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        " Tab next  Left/Right choose  Enter submit  Esc cancel",
        Styles::dim(),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Register employee ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}
