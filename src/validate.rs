//! Form field validation.
//!
//! A submission gate runs an ordered list of [`Rule`]s against the current
//! field values before a form is allowed to submit. Every rule is evaluated
//! (no short-circuit) so the user sees one message per violated rule, in
//! declaration order. Validation is pure: field values are read, never
//! mutated, and no I/O happens here.

use std::sync::LazyLock;

use regex::Regex;

/// Permissive email shape: non-space/non-@ chars, one `@`, a dot in the
/// domain part. Deliberately not a full email grammar.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Sri Lankan NIC: 9 digits with optional V/X suffix, or 12 digits.
pub const NIC_PATTERN: &str = r"^\d{9}[VXvx]?$|^\d{12}$";

/// Local telephone number: exactly 10 digits.
pub const PHONE_PATTERN: &str = r"^\d{10}$";

/// Placeholder value of an unset select field.
pub const SELECT_PLACEHOLDER: &str = "Choose...";

/// Special characters a password must draw from.
const PASSWORD_SPECIALS: &str = "!@#$%^&*";

/// A validity predicate over one field's string value.
#[derive(Debug, Clone)]
pub enum FieldCheck {
    /// Permissive email pattern.
    Email,
    /// Length >= 6, at least one digit, at least one of `!@#$%^&*`.
    Password,
    /// Generic regex match.
    Pattern(Regex),
    /// Value must differ from the given sentinel.
    NotPlaceholder(&'static str),
    /// Empty passes; otherwise must parse as a number >= 0.
    NonNegativeIfPresent,
}

impl FieldCheck {
    /// Compiles a [`FieldCheck::Pattern`] from a known-good pattern literal.
    pub fn pattern(pattern: &str) -> Self {
        FieldCheck::Pattern(Regex::new(pattern).unwrap())
    }

    /// Returns true if `value` satisfies the predicate.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FieldCheck::Email => EMAIL_RE.is_match(value),
            FieldCheck::Password => {
                value.len() >= 6
                    && value.chars().any(|c| c.is_ascii_digit())
                    && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
            }
            FieldCheck::Pattern(re) => re.is_match(value),
            FieldCheck::NotPlaceholder(sentinel) => value != *sentinel,
            FieldCheck::NonNegativeIfPresent => {
                value.is_empty() || value.parse::<f64>().map(|n| n >= 0.0).unwrap_or(false)
            }
        }
    }
}

/// One named field with its predicate and failure message.
#[derive(Debug, Clone)]
pub struct Rule {
    pub field: &'static str,
    pub check: FieldCheck,
    pub message: &'static str,
}

impl Rule {
    pub fn new(field: &'static str, check: FieldCheck, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }
}

/// Aggregated result of one validation pass.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Failure messages, one per violated rule, in rule order.
    pub failures: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Evaluates every rule against the field values supplied by `value_of`.
///
/// All rules run even after a failure; the report collects every violation
/// rather than just the first.
pub fn run_rules<'a, F>(rules: &[Rule], value_of: F) -> ValidationReport
where
    F: Fn(&str) -> &'a str,
{
    let mut report = ValidationReport::default();
    for rule in rules {
        if !rule.check.accepts(value_of(rule.field)) {
            report.failures.push(rule.message.to_string());
        }
    }
    report
}

/// The employee registration form's rule list.
pub fn employee_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "email",
            FieldCheck::Email,
            "Please enter a valid email address.",
        ),
        Rule::new(
            "password",
            FieldCheck::Password,
            "Password must be at least 6 characters long and include at least one number and one special character.",
        ),
        Rule::new(
            "nic",
            FieldCheck::pattern(NIC_PATTERN),
            "Please enter a valid NIC number.",
        ),
        Rule::new(
            "telephone",
            FieldCheck::pattern(PHONE_PATTERN),
            "Please enter a valid 10-digit telephone number.",
        ),
        Rule::new(
            "gender",
            FieldCheck::NotPlaceholder(SELECT_PLACEHOLDER),
            "Please select a valid gender.",
        ),
        Rule::new(
            "sbu",
            FieldCheck::NotPlaceholder(SELECT_PLACEHOLDER),
            "Please select a valid SBU.",
        ),
        Rule::new(
            "opd_credit_limit",
            FieldCheck::NonNegativeIfPresent,
            "OPD Credit Limit cannot be negative.",
        ),
        Rule::new(
            "fuel_credit_limit",
            FieldCheck::NonNegativeIfPresent,
            "Fuel Credit Limit cannot be negative.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(
        values: &'a HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> &'a str {
        move |field| values.get(field).copied().unwrap_or("")
    }

    #[test]
    fn email_matches_exact_permissive_pattern() {
        let check = FieldCheck::Email;
        assert!(check.accepts("a@b.co"));
        assert!(!check.accepts("a@b"));
        assert!(!check.accepts("noatsign.com"));
        // Two @ in a row: the local/domain parts exclude '@', so this fails.
        assert!(!check.accepts("a@@b.com"));
    }

    #[test]
    fn password_requires_length_digit_and_special() {
        let check = FieldCheck::Password;
        assert!(check.accepts("Abc123!"));
        assert!(!check.accepts("Ab1!")); // too short
        assert!(!check.accepts("Abcdef!")); // no digit
        assert!(!check.accepts("Abc123")); // no special
    }

    #[test]
    fn nic_accepts_both_national_formats() {
        let check = FieldCheck::pattern(NIC_PATTERN);
        assert!(check.accepts("123456789V"));
        assert!(check.accepts("123456789x"));
        assert!(check.accepts("123456789012"));
        assert!(!check.accepts("12345"));
        assert!(!check.accepts("123456789VV"));
    }

    #[test]
    fn phone_requires_ten_digits() {
        let check = FieldCheck::pattern(PHONE_PATTERN);
        assert!(check.accepts("0771234567"));
        assert!(!check.accepts("077123456"));
        assert!(!check.accepts("077123456a"));
    }

    #[test]
    fn placeholder_select_is_rejected() {
        let check = FieldCheck::NotPlaceholder(SELECT_PLACEHOLDER);
        assert!(!check.accepts("Choose..."));
        assert!(check.accepts("Female"));
    }

    #[test]
    fn credit_limit_optional_but_non_negative() {
        let check = FieldCheck::NonNegativeIfPresent;
        assert!(check.accepts(""));
        assert!(check.accepts("0"));
        assert!(check.accepts("1500.50"));
        assert!(!check.accepts("-1"));
        assert!(!check.accepts("abc"));
    }

    #[test]
    fn every_violated_rule_reports_once_in_order() {
        let mut values = HashMap::new();
        values.insert("email", "not-an-email");
        values.insert("password", "Abc123!");
        values.insert("nic", "12345");
        values.insert("telephone", "0771234567");
        values.insert("gender", "Choose...");
        values.insert("sbu", "Finance");
        values.insert("opd_credit_limit", "");
        values.insert("fuel_credit_limit", "-5");

        let report = run_rules(&employee_rules(), lookup(&values));
        assert!(!report.is_valid());
        assert_eq!(
            report.failures,
            vec![
                "Please enter a valid email address.".to_string(),
                "Please enter a valid NIC number.".to_string(),
                "Please select a valid gender.".to_string(),
                "Fuel Credit Limit cannot be negative.".to_string(),
            ]
        );
    }

    #[test]
    fn fully_valid_form_passes() {
        let mut values = HashMap::new();
        values.insert("email", "jane@acorn.lk");
        values.insert("password", "Abc123!");
        values.insert("nic", "123456789V");
        values.insert("telephone", "0771234567");
        values.insert("gender", "Female");
        values.insert("sbu", "Finance");
        values.insert("opd_credit_limit", "10000");
        values.insert("fuel_credit_limit", "");

        let report = run_rules(&employee_rules(), lookup(&values));
        assert!(report.is_valid());
        assert!(report.failures.is_empty());
    }
}
