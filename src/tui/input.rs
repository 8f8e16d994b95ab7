//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, EmployeeFormState, InputMode, PasswordFormState, PasswordRequest, Tab};
use crate::model::Decision;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Re-fetch directory data and the employee count.
    Refresh,
    /// Issue a password change request.
    ChangePassword(PasswordRequest),
    /// Fetch the images of a claim and open its detail dialog.
    OpenClaimDetail(String),
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.show_quit_confirm {
        return handle_quit_confirm(state, key);
    }
    if state.password_form.is_some() {
        return handle_password_form(state, key);
    }
    if state.employee_form.is_some() {
        return handle_employee_form(state, key);
    }
    if state.claim_detail.is_some() {
        return handle_claim_detail(state, key);
    }
    if state.show_help {
        return handle_help(state, key);
    }
    if state.editing_comment {
        return handle_comment_edit(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Filter => handle_filter_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter
        | KeyCode::Char('y')
        | KeyCode::Char('Y')
        | KeyCode::Char('q')
        | KeyCode::Char('Q') => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.show_quit_confirm = false;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_password_form(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let Some(form) = state.password_form.as_mut() else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Esc => {
            state.password_form = None;
            KeyAction::None
        }
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
            KeyAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            KeyAction::None
        }
        KeyCode::Backspace => {
            form.backspace();
            KeyAction::None
        }
        KeyCode::Enter => match form.submit(&mut state.notices) {
            Some(request) => KeyAction::ChangePassword(request),
            None => KeyAction::None,
        },
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char(c) => {
            form.input_char(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_employee_form(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let Some(form) = state.employee_form.as_mut() else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Esc => {
            state.employee_form = None;
            KeyAction::None
        }
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
            KeyAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            KeyAction::None
        }
        KeyCode::Left => {
            form.cycle_select(false);
            KeyAction::None
        }
        KeyCode::Right => {
            form.cycle_select(true);
            KeyAction::None
        }
        KeyCode::Backspace => {
            form.backspace();
            KeyAction::None
        }
        KeyCode::Enter => {
            // Invalid forms stay open; every violation was already pushed
            // as a notice.
            if form.submit(&mut state.notices) {
                state.employee_form = None;
                state.notices.success("Employee details validated.");
            }
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char(c) => {
            form.input_char(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_claim_detail(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let Some(detail) = state.claim_detail.as_mut() else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.claim_detail = None;
            KeyAction::None
        }
        KeyCode::Left => {
            detail.prev_image();
            KeyAction::None
        }
        KeyCode::Right => {
            detail.next_image();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') => {
            state.show_help = false;
            KeyAction::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.help_scroll = state.help_scroll.saturating_add(1);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_comment_edit(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.editing_comment = false;
            KeyAction::None
        }
        KeyCode::Backspace => {
            if let Some(review) = state.selected_review() {
                review.comment.pop();
            }
            KeyAction::None
        }
        KeyCode::Char(c) => {
            if let Some(review) = state.selected_review() {
                review.comment.push(c);
            }
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.show_quit_confirm = true;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Tab navigation
        KeyCode::Tab => {
            state.switch_tab(state.current_tab.next());
            KeyAction::None
        }
        KeyCode::BackTab => {
            state.switch_tab(state.current_tab.prev());
            KeyAction::None
        }
        KeyCode::Char('1') => {
            state.switch_tab(Tab::Employees);
            KeyAction::None
        }
        KeyCode::Char('2') => {
            state.switch_tab(Tab::Claims);
            KeyAction::None
        }

        // Row navigation
        KeyCode::Up | KeyCode::Char('k') => {
            match state.current_tab {
                Tab::Employees => state.employees.select_up(),
                Tab::Claims => state.claims.select_up(),
            }
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            match state.current_tab {
                Tab::Employees => state.employees.select_down(),
                Tab::Claims => state.claims.select_down(),
            }
            KeyAction::None
        }
        KeyCode::PageUp => {
            match state.current_tab {
                Tab::Employees => state.employees.page_up(20),
                Tab::Claims => state.claims.page_up(20),
            }
            KeyAction::None
        }
        KeyCode::PageDown => {
            match state.current_tab {
                Tab::Employees => state.employees.page_down(20),
                Tab::Claims => state.claims.page_down(20),
            }
            KeyAction::None
        }
        KeyCode::Home => {
            match state.current_tab {
                Tab::Employees => state.employees.home(),
                Tab::Claims => state.claims.home(),
            }
            KeyAction::None
        }
        KeyCode::End => {
            match state.current_tab {
                Tab::Employees => state.employees.end(),
                Tab::Claims => state.claims.end(),
            }
            KeyAction::None
        }

        // Sorting
        KeyCode::Char('s') | KeyCode::Char('S') => {
            match state.current_tab {
                Tab::Employees => state.employees.next_sort_column(),
                Tab::Claims => state.claims.next_sort_column(),
            }
            KeyAction::None
        }
        KeyCode::Char('r') => {
            match state.current_tab {
                Tab::Employees => state.employees.toggle_sort_direction(),
                Tab::Claims => state.claims.toggle_sort_direction(),
            }
            KeyAction::None
        }

        // Refresh directory data
        KeyCode::Char('R') => KeyAction::Refresh,

        // Filter mode
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Filter;
            state.filter_input.clear();
            KeyAction::None
        }

        // Registration form (employees tab)
        KeyCode::Char('n') | KeyCode::Char('N') => {
            if state.current_tab == Tab::Employees {
                state.employee_form = Some(EmployeeFormState::new());
            }
            KeyAction::None
        }

        // Password change dialog
        KeyCode::Char('P') => {
            state.password_form = Some(PasswordFormState::default());
            KeyAction::None
        }

        // Claim review decisions (claims tab)
        KeyCode::Char('a') | KeyCode::Char('A') => {
            set_decision(state, Decision::Approved);
            KeyAction::None
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            set_decision(state, Decision::Rejected);
            KeyAction::None
        }
        KeyCode::Char('u') | KeyCode::Char('U') => {
            set_decision(state, Decision::Pending);
            KeyAction::None
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            // Comment editing is only offered while the claim is decided.
            if state.current_tab == Tab::Claims {
                let decided = state
                    .selected_review()
                    .map(|r| r.decision.comment_visible())
                    .unwrap_or(false);
                if decided {
                    state.editing_comment = true;
                }
            }
            KeyAction::None
        }

        // Claim detail dialog
        KeyCode::Enter => {
            if state.current_tab == Tab::Claims {
                if let Some(claim) = state.claims.selected_item() {
                    return KeyAction::OpenClaimDetail(claim.id.clone());
                }
            }
            KeyAction::None
        }

        // Help popup
        KeyCode::Char('?') | KeyCode::Char('H') => {
            state.show_help = !state.show_help;
            if state.show_help {
                state.help_scroll = 0;
            }
            KeyAction::None
        }

        // Clear notices
        KeyCode::Esc => {
            state.notices.clear();
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

/// Handles keys in filter mode. The filter reapplies on every keystroke.
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            // Cancel filter
            state.input_mode = InputMode::Normal;
            state.filter_input.clear();
            match state.current_tab {
                Tab::Employees => state.employees.set_filter(None),
                Tab::Claims => state.claims.set_filter(None),
            }
            KeyAction::None
        }
        KeyCode::Enter => {
            // Filter is already applied in real time; just leave the mode.
            state.input_mode = InputMode::Normal;
            KeyAction::None
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            state.apply_current_filter();
            KeyAction::None
        }
        KeyCode::Char(c) => {
            state.filter_input.push(c);
            state.apply_current_filter();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn set_decision(state: &mut AppState, decision: Decision) {
    if state.current_tab != Tab::Claims {
        return;
    }
    if let Some(review) = state.selected_review() {
        review.decision = decision;
        // Hiding the comment field does not erase its text.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Claim;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn state_with_claims() -> AppState {
        let mut state = AppState::new(false);
        state.claims.update(vec![
            Claim {
                id: "claim1".to_string(),
                ..Claim::default()
            },
            Claim {
                id: "claim2".to_string(),
                ..Claim::default()
            },
        ]);
        state.current_tab = Tab::Claims;
        state
    }

    #[test]
    fn filter_mode_applies_live_and_cancels_on_esc() {
        let mut state = state_with_claims();

        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.input_mode, InputMode::Filter);

        let _ = handle_key(&mut state, key(KeyCode::Char('c')));
        let _ = handle_key(&mut state, key(KeyCode::Char('l')));
        assert_eq!(state.claims.filter.as_deref(), Some("cl"));
        assert_eq!(state.claims.visible_len(), 2);

        let _ = handle_key(&mut state, key(KeyCode::Char('x')));
        assert_eq!(state.claims.visible_len(), 0);

        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.claims.filter, None);
        assert_eq!(state.claims.visible_len(), 2);
    }

    #[test]
    fn quit_requires_confirmation() {
        let mut state = AppState::new(false);

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert!(state.show_quit_confirm);

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::Quit);
        assert!(!state.show_quit_confirm);
    }

    #[test]
    fn quit_confirmation_accepts_y() {
        let mut state = AppState::new(false);
        let _ = handle_key(&mut state, key(KeyCode::Char('q')));
        let action = handle_key(&mut state, key(KeyCode::Char('y')));
        assert_eq!(action, KeyAction::Quit);
        assert!(!state.show_quit_confirm);
    }

    #[test]
    fn quit_confirmation_cancels_on_esc() {
        let mut state = AppState::new(false);
        let _ = handle_key(&mut state, key(KeyCode::Char('q')));
        let action = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(action, KeyAction::None);
        assert!(!state.show_quit_confirm);
    }

    #[test]
    fn decision_keys_gate_the_comment_field() {
        let mut state = state_with_claims();

        // Pending claim: comment editing refused.
        let _ = handle_key(&mut state, key(KeyCode::Char('c')));
        assert!(!state.editing_comment);

        let _ = handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(
            state.selected_review().unwrap().decision,
            Decision::Approved
        );

        let _ = handle_key(&mut state, key(KeyCode::Char('c')));
        assert!(state.editing_comment);

        let _ = handle_key(&mut state, key(KeyCode::Char('o')));
        let _ = handle_key(&mut state, key(KeyCode::Char('k')));
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert!(!state.editing_comment);
        assert_eq!(state.selected_review().unwrap().comment, "ok");

        // Back to pending hides, but keeps, the comment.
        let _ = handle_key(&mut state, key(KeyCode::Char('u')));
        assert_eq!(state.selected_review().unwrap().comment, "ok");
    }

    #[test]
    fn enter_on_claims_requests_detail_dialog() {
        let mut state = state_with_claims();
        let action = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(action, KeyAction::OpenClaimDetail("claim1".to_string()));
    }

    #[test]
    fn password_dialog_submits_through_enter() {
        let mut state = AppState::new(false);
        let _ = handle_key(&mut state, key(KeyCode::Char('P')));
        assert!(state.password_form.is_some());

        // Type the current password, then tab through and fill the rest.
        for c in "old1!".chars() {
            let _ = handle_key(&mut state, key(KeyCode::Char(c)));
        }
        let _ = handle_key(&mut state, key(KeyCode::Tab));
        for c in "Abc123!".chars() {
            let _ = handle_key(&mut state, key(KeyCode::Char(c)));
        }
        let _ = handle_key(&mut state, key(KeyCode::Tab));
        for c in "Abc123!".chars() {
            let _ = handle_key(&mut state, key(KeyCode::Char(c)));
        }

        let action = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(
            action,
            KeyAction::ChangePassword(PasswordRequest {
                current: "old1!".to_string(),
                new: "Abc123!".to_string(),
            })
        );

        // A second Enter while submitting is swallowed.
        let action = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(action, KeyAction::None);
    }

    #[test]
    fn registration_form_opens_on_employees_tab_only() {
        let mut state = state_with_claims();
        let _ = handle_key(&mut state, key(KeyCode::Char('n')));
        assert!(state.employee_form.is_none());

        state.switch_tab(Tab::Employees);
        let _ = handle_key(&mut state, key(KeyCode::Char('n')));
        assert!(state.employee_form.is_some());
    }

    #[test]
    fn refresh_is_requested_with_capital_r() {
        let mut state = AppState::new(false);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('R'))), KeyAction::Refresh);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('r'))), KeyAction::None);
    }
}
