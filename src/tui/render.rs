//! Top-level frame composition.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::{AppState, Tab};
use super::widgets::{
    render_claim_detail, render_claims, render_employee_form, render_employees, render_header,
    render_help, render_notices, render_password_form, render_quit_confirm, render_summary,
};

/// Renders the whole UI. Popups and notices draw last so they overlay the
/// tables.
pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(5),
    ])
    .split(f.area());

    render_header(f, state, chunks[0]);
    render_summary(f, state, chunks[1]);

    match state.current_tab {
        Tab::Employees => render_employees(f, state, chunks[2]),
        Tab::Claims => render_claims(f, state, chunks[2]),
    }

    if state.claim_detail.is_some() {
        render_claim_detail(f, state);
    }
    if let Some(form) = state.employee_form.as_ref() {
        render_employee_form(f, form);
    }
    if let Some(form) = state.password_form.as_ref() {
        render_password_form(f, form);
    }
    if state.show_help {
        render_help(f, state.help_scroll);
    }
    if state.show_quit_confirm {
        render_quit_confirm(f);
    }

    render_notices(f, state);
}
