//! Admin password change popup.

use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::state::{PasswordFormState, PasswordPhase};
use crate::tui::style::Styles;

use super::common::centered_box;

pub fn render_password_form(f: &mut Frame, form: &PasswordFormState) {
    let area = centered_box(46, 9, f.area());
    f.render_widget(Clear, area);

    let mut lines = Vec::new();
    for (i, label) in PasswordFormState::FIELDS.iter().enumerate() {
        let active = i == form.active;
        let masked = "*".repeat(form.field_value(i).chars().count());
        let cursor = if active { "_" } else { "" };
        let style = if active {
            Styles::field_active()
        } else {
            Styles::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {label:<18}"), Styles::dim()),
            Span::styled(format!("{masked}{cursor}"), style),
        ]));
    }
    lines.push(Line::raw(""));
    if form.phase == PasswordPhase::Submitting {
        lines.push(Line::styled(" Submitting...", Styles::tab_active()));
    } else {
        lines.push(Line::styled(
            " Tab next  Enter submit  Esc cancel",
            Styles::dim(),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Change admin password ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}
