//! Backend access for the console.
//!
//! Two traits split the backend surface along its concurrency seam:
//! [`DirectoryProvider`] covers the synchronous reads done on the UI thread
//! (directory rows, employee count, claim images), while [`PasswordGateway`]
//! covers the one asynchronous write (admin password change) and is shared
//! with the worker thread that performs it.
//!
//! Implementations:
//! - [`HttpClient`] - live mode against the HR backend
//! - [`SampleBackend`] - offline demo data

mod http;
mod sample;

pub use http::HttpClient;
pub use sample::SampleBackend;

use crate::model::{Claim, Employee, PasswordResponse, SubmissionOutcome};

/// Default user-facing text when the backend reports success without a message.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Password successfully changed!";

/// Default user-facing text when the backend reports failure without a reason.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to change password!";

/// Error types that can occur while talking to the backend.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, TLS).
    Transport(String),
    /// Unexpected HTTP status.
    Status(u16),
    /// Response body could not be decoded.
    Decode(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "transport error: {}", msg),
            ClientError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            ClientError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

/// Synchronous directory reads used by the UI thread.
///
/// Object-safe so the console can hold a `Box<dyn DirectoryProvider>` and
/// swap live and sample backends.
pub trait DirectoryProvider {
    /// Employee records for the employees table.
    fn employees(&self) -> Result<Vec<Employee>, ClientError>;

    /// Pending claims for the claims table.
    fn claims(&self) -> Result<Vec<Claim>, ClientError>;

    /// Total number of employees, for the dashboard strip.
    fn employee_count(&self) -> Result<u64, ClientError>;

    /// Image references attached to a claim. Unknown claims yield an empty
    /// list, not an error.
    fn claim_images(&self, claim_id: &str) -> Result<Vec<String>, ClientError>;

    /// Returns `true` when backed by a live HTTP backend.
    fn is_live(&self) -> bool;
}

/// The password change endpoint, callable from a worker thread.
pub trait PasswordGateway: Send + Sync {
    fn change_password(&self, current: &str, new: &str) -> Result<PasswordResponse, ClientError>;
}

/// Maps a password change result onto the outcome shown to the user.
pub fn submission_outcome(result: Result<PasswordResponse, ClientError>) -> SubmissionOutcome {
    match result {
        Ok(resp) if resp.success => SubmissionOutcome::Success {
            message: resp
                .message
                .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
        },
        Ok(resp) => SubmissionOutcome::Failure {
            message: resp
                .error
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        },
        Err(e) => SubmissionOutcome::Failure {
            message: format!("Error updating password: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_uses_server_message() {
        let outcome = submission_outcome(Ok(PasswordResponse {
            success: true,
            message: Some("Password successfully changed!".to_string()),
            error: None,
        }));
        assert_eq!(
            outcome,
            SubmissionOutcome::Success {
                message: "Password successfully changed!".to_string()
            }
        );
    }

    #[test]
    fn success_without_message_uses_default() {
        let outcome = submission_outcome(Ok(PasswordResponse {
            success: true,
            message: None,
            error: None,
        }));
        assert_eq!(
            outcome,
            SubmissionOutcome::Success {
                message: DEFAULT_SUCCESS_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn rejection_uses_server_error_or_default() {
        let outcome = submission_outcome(Ok(PasswordResponse {
            success: false,
            message: None,
            error: Some("Current password is incorrect. Try again.".to_string()),
        }));
        assert_eq!(
            outcome,
            SubmissionOutcome::Failure {
                message: "Current password is incorrect. Try again.".to_string()
            }
        );

        let outcome = submission_outcome(Ok(PasswordResponse::default()));
        assert_eq!(
            outcome,
            SubmissionOutcome::Failure {
                message: DEFAULT_FAILURE_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn transport_error_is_reported_with_reason() {
        let outcome = submission_outcome(Err(ClientError::Transport("timed out".to_string())));
        match outcome {
            SubmissionOutcome::Failure { message } => {
                assert!(message.starts_with("Error updating password: "));
                assert!(message.contains("timed out"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
