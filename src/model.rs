//! Data model shared between the backend client and the console.

use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

/// One employee record.
///
/// The backend only serves `id` and `name` as JSON; the remaining columns
/// default to empty when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub sbu: String,
    #[serde(default)]
    pub telephone: String,
}

/// One pending claim awaiting review.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    pub emp_id: String,
    #[serde(default)]
    pub employee: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub message: String,
}

/// Review decision for a claim. Held by the console, never written back
/// into the claim row itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decision {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl Decision {
    pub fn name(&self) -> &'static str {
        match self {
            Decision::Pending => "Pending",
            Decision::Approved => "Approved",
            Decision::Rejected => "Rejected",
        }
    }

    /// The comment field is shown only for a decided claim.
    pub fn comment_visible(&self) -> bool {
        matches!(self, Decision::Approved | Decision::Rejected)
    }
}

/// Response body of `POST /change_admin_password`.
///
/// The backend omits `success` entirely on some error paths, so it
/// defaults to `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PasswordResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome of one password change submission, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { message: String },
    Failure { message: String },
}

/// Stable row identity for diff-free tables keyed by a text identifier.
pub fn row_key(id: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_visible_only_when_decided() {
        assert!(!Decision::Pending.comment_visible());
        assert!(Decision::Approved.comment_visible());
        assert!(Decision::Rejected.comment_visible());
    }

    #[test]
    fn row_key_is_stable_and_distinct() {
        assert_eq!(row_key("claim1"), row_key("claim1"));
        assert_ne!(row_key("claim1"), row_key("claim2"));
    }

    #[test]
    fn password_response_defaults_tolerate_missing_fields() {
        let resp: PasswordResponse = serde_json::from_str("{}").unwrap();
        assert!(!resp.success);
        assert!(resp.message.is_none());
        assert!(resp.error.is_none());
    }
}
