//! Application state management.

use std::collections::HashMap;

use chrono::Local;

use crate::model::{Claim, Decision, Employee, SubmissionOutcome, row_key};
use crate::util::{MonthProgress, month_progress};
use crate::validate::{SELECT_PLACEHOLDER, employee_rules, run_rules};

use super::notify::Notices;
use super::table::TableState;

/// Available tabs in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Employees,
    Claims,
}

impl Tab {
    /// Returns the display name of the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Employees => "EMP",
            Tab::Claims => "CLM",
        }
    }

    /// Returns the next tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Employees => Tab::Claims,
            Tab::Claims => Tab::Employees,
        }
    }

    /// Returns the previous tab.
    pub fn prev(&self) -> Tab {
        self.next()
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
}

/// Employee count slot on the dashboard strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountState {
    #[default]
    Unknown,
    Known(u64),
    /// Any fetch or decode failure renders as the literal text "Error".
    Error,
}

impl CountState {
    pub fn text(&self) -> String {
        match self {
            CountState::Unknown => "-".to_string(),
            CountState::Known(n) => n.to_string(),
            CountState::Error => "Error".to_string(),
        }
    }
}

/// Review state the console keeps per claim. The claim row itself is never
/// modified.
#[derive(Debug, Clone, Default)]
pub struct ClaimReview {
    pub decision: Decision,
    pub comment: String,
}

/// Claim detail dialog: image references with a carousel cursor.
#[derive(Debug, Clone)]
pub struct ClaimDetailState {
    pub claim_id: String,
    pub images: Vec<String>,
    pub index: usize,
}

impl ClaimDetailState {
    pub fn next_image(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn prev_image(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }
}

/// Kind of a registration form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    Select(&'static [&'static str]),
}

/// One field of the registration form.
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    fn text(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Text,
            value: String::new(),
        }
    }

    fn secret(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Secret,
            value: String::new(),
        }
    }

    fn select(id: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Select(options),
            value: options.first().unwrap_or(&"").to_string(),
        }
    }
}

const GENDER_OPTIONS: &[&str] = &[SELECT_PLACEHOLDER, "Male", "Female", "Other"];
const SBU_OPTIONS: &[&str] = &[SELECT_PLACEHOLDER, "Finance", "HR", "IT", "Logistics"];

/// Employee registration form popup.
#[derive(Debug, Clone)]
pub struct EmployeeFormState {
    pub fields: Vec<FormField>,
    pub active: usize,
}

impl EmployeeFormState {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::text("email", "Email"),
                FormField::secret("password", "Password"),
                FormField::text("nic", "NIC"),
                FormField::text("telephone", "Telephone"),
                FormField::select("gender", "Gender", GENDER_OPTIONS),
                FormField::select("sbu", "SBU", SBU_OPTIONS),
                FormField::text("opd_credit_limit", "OPD credit limit"),
                FormField::text("fuel_credit_limit", "Fuel credit limit"),
            ],
            active: 0,
        }
    }

    pub fn next_field(&mut self) {
        self.active = (self.active + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.active = (self.active + self.fields.len() - 1) % self.fields.len();
    }

    pub fn value_of(&self, id: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Types a character into the active field. Select fields ignore typing.
    pub fn input_char(&mut self, c: char) {
        let field = &mut self.fields[self.active];
        if !matches!(field.kind, FieldKind::Select(_)) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        let field = &mut self.fields[self.active];
        if !matches!(field.kind, FieldKind::Select(_)) {
            field.value.pop();
        }
    }

    /// Cycles the active field through its options, if it is a select.
    pub fn cycle_select(&mut self, forward: bool) {
        let field = &mut self.fields[self.active];
        if let FieldKind::Select(options) = field.kind {
            let pos = options
                .iter()
                .position(|o| *o == field.value)
                .unwrap_or(0);
            let next = if forward {
                (pos + 1) % options.len()
            } else {
                (pos + options.len() - 1) % options.len()
            };
            field.value = options[next].to_string();
        }
    }

    /// Runs the registration rules. Every violated rule becomes one error
    /// notice, in rule order; returns whether the form may submit.
    pub fn submit(&self, notices: &mut Notices) -> bool {
        let report = run_rules(&employee_rules(), |field| self.value_of(field));
        for message in &report.failures {
            notices.error(message.clone());
        }
        report.is_valid()
    }
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Phase of the password change flow. Validation and the two terminal
/// states are transient within a single event-handler pass, so only the
/// steady states are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordPhase {
    #[default]
    Idle,
    Submitting,
}

/// Payload of one password change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRequest {
    pub current: String,
    pub new: String,
}

/// Password change dialog.
#[derive(Debug, Clone, Default)]
pub struct PasswordFormState {
    pub current: String,
    pub new: String,
    pub confirm: String,
    pub active: usize,
    pub phase: PasswordPhase,
}

impl PasswordFormState {
    pub const FIELDS: [&'static str; 3] = ["Current password", "New password", "Confirm password"];

    pub fn next_field(&mut self) {
        self.active = (self.active + 1) % Self::FIELDS.len();
    }

    pub fn prev_field(&mut self) {
        self.active = (self.active + Self::FIELDS.len() - 1) % Self::FIELDS.len();
    }

    pub fn field_value(&self, index: usize) -> &str {
        match index {
            0 => &self.current,
            1 => &self.new,
            _ => &self.confirm,
        }
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.active {
            0 => &mut self.current,
            1 => &mut self.new,
            _ => &mut self.confirm,
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.active_value_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    /// Gates the submission. Returns the request to issue, or `None` when
    /// validation failed or a request is already in flight.
    pub fn submit(&mut self, notices: &mut Notices) -> Option<PasswordRequest> {
        if self.phase == PasswordPhase::Submitting {
            // Busy guard: one request in flight per form.
            return None;
        }
        if self.new != self.confirm {
            notices.error("New passwords do not match!");
            return None;
        }
        self.phase = PasswordPhase::Submitting;
        Some(PasswordRequest {
            current: self.current.clone(),
            new: self.new.clone(),
        })
    }
}

/// Top-level application state.
pub struct AppState {
    pub current_tab: Tab,
    pub input_mode: InputMode,
    /// Filter text being typed in filter mode.
    pub filter_input: String,

    pub employees: TableState<Employee>,
    pub claims: TableState<Claim>,
    /// Review decision and comment per claim, keyed by row identity.
    pub reviews: HashMap<u64, ClaimReview>,
    /// Whether keystrokes currently edit the selected claim's comment.
    pub editing_comment: bool,

    pub claim_detail: Option<ClaimDetailState>,
    pub employee_form: Option<EmployeeFormState>,
    pub password_form: Option<PasswordFormState>,

    pub show_help: bool,
    pub help_scroll: usize,
    pub show_quit_confirm: bool,

    pub notices: Notices,
    pub employee_count: CountState,
    pub month: MonthProgress,
    pub is_live: bool,
    pub terminal_width: u16,
}

impl AppState {
    pub fn new(is_live: bool) -> Self {
        Self {
            current_tab: Tab::default(),
            input_mode: InputMode::default(),
            filter_input: String::new(),
            // Both tables key on their first column (EmpID / ClaimID).
            employees: TableState::new(0),
            claims: TableState::new(0),
            reviews: HashMap::new(),
            editing_comment: false,
            claim_detail: None,
            employee_form: None,
            password_form: None,
            show_help: false,
            help_scroll: 0,
            show_quit_confirm: false,
            notices: Notices::new(),
            employee_count: CountState::Unknown,
            month: month_progress(Local::now().date_naive()),
            is_live,
            terminal_width: 0,
        }
    }

    pub fn any_popup_open(&self) -> bool {
        self.claim_detail.is_some()
            || self.employee_form.is_some()
            || self.password_form.is_some()
            || self.show_help
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
        self.input_mode = InputMode::Normal;
        self.filter_input.clear();
        self.editing_comment = false;
    }

    /// Applies the in-progress filter text to the current tab's table.
    pub fn apply_current_filter(&mut self) {
        let filter = if self.filter_input.is_empty() {
            None
        } else {
            Some(self.filter_input.clone())
        };
        match self.current_tab {
            Tab::Employees => self.employees.set_filter(filter),
            Tab::Claims => self.claims.set_filter(filter),
        }
    }

    /// Review slot for the selected claim, created on first access.
    pub fn selected_review(&mut self) -> Option<&mut ClaimReview> {
        let id = self.claims.selected_item().map(|c| row_key(&c.id))?;
        Some(self.reviews.entry(id).or_default())
    }

    /// Review slot for a claim row, read-only.
    pub fn review_of(&self, claim: &Claim) -> ClaimReview {
        self.reviews
            .get(&row_key(&claim.id))
            .cloned()
            .unwrap_or_default()
    }

    /// Folds the password change outcome back into the UI: notice, dialog
    /// dismissal on success, phase reset on failure.
    pub fn apply_password_outcome(&mut self, outcome: SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Success { message } => {
                self.notices.success(message);
                // Closing the dialog drops the field values with it.
                self.password_form = None;
            }
            SubmissionOutcome::Failure { message } => {
                self.notices.error(message);
                if let Some(form) = self.password_form.as_mut() {
                    form.phase = PasswordPhase::Idle;
                }
            }
        }
    }
}
