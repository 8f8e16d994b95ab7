//! Live HTTP client for the HR backend.
//!
//! Endpoints consumed:
//! - `GET /employee_count` -> `{"count": n}`
//! - `GET /get_employees` -> `[{"id", "name"}]`
//! - `GET /get_claim_details/<id>` -> `{..., "images": [...]}`
//! - `POST /change_admin_password` -> `{"success", "message"?, "error"?}`

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ClientError, DirectoryProvider, PasswordGateway};
use crate::model::{Claim, Employee, PasswordResponse};

/// Request timeout. Bounds how long a password change can stay in flight.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the HR backend.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpClient {
    /// Creates a client for the backend at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        resp.json().map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// The backend serves employee ids as numbers; older records as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

#[derive(Deserialize)]
struct CountResponse {
    count: u64,
}

#[derive(Deserialize)]
struct EmployeeEntry {
    id: RawId,
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct ClaimDetails {
    #[serde(default)]
    images: Vec<String>,
}

#[derive(Serialize)]
struct PasswordChange<'a> {
    #[serde(rename = "currentPassword")]
    current_password: &'a str,
    #[serde(rename = "newPassword")]
    new_password: &'a str,
}

impl DirectoryProvider for HttpClient {
    fn employees(&self) -> Result<Vec<Employee>, ClientError> {
        let entries: Vec<EmployeeEntry> = self.get_json("/get_employees")?;
        Ok(entries
            .into_iter()
            .map(|e| Employee {
                id: e.id.into_string(),
                name: e.name,
                ..Employee::default()
            })
            .collect())
    }

    fn claims(&self) -> Result<Vec<Claim>, ClientError> {
        // The backend renders the claims listing as HTML only; there is no
        // JSON endpoint to consume.
        warn!("backend exposes no JSON claims listing; claims table stays empty");
        Ok(Vec::new())
    }

    fn employee_count(&self) -> Result<u64, ClientError> {
        let resp: CountResponse = self.get_json("/employee_count")?;
        Ok(resp.count)
    }

    fn claim_images(&self, claim_id: &str) -> Result<Vec<String>, ClientError> {
        let url = self.url(&format!("/get_claim_details/{}", claim_id));
        debug!("GET {}", url);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            // Unknown claim: the dialog shows its "no images" placeholder.
            return Ok(Vec::new());
        }
        let details: ClaimDetails = resp.json().map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(details.images)
    }

    fn is_live(&self) -> bool {
        true
    }
}

impl PasswordGateway for HttpClient {
    fn change_password(&self, current: &str, new: &str) -> Result<PasswordResponse, ClientError> {
        let url = self.url("/change_admin_password");
        debug!("POST {}", url);
        let resp = self
            .client
            .post(&url)
            .json(&PasswordChange {
                current_password: current,
                new_password: new,
            })
            .send()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        // The backend reports rejections in the body, also on non-2xx
        // statuses, so the body is decoded regardless of status.
        resp.json().map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_entry_accepts_numeric_and_text_ids() {
        let e: EmployeeEntry = serde_json::from_str(r#"{"id": 7, "name": "Jane Dias"}"#).unwrap();
        assert_eq!(e.id.into_string(), "7");
        assert_eq!(e.name, "Jane Dias");

        let e: EmployeeEntry = serde_json::from_str(r#"{"id": "E007"}"#).unwrap();
        assert_eq!(e.id.into_string(), "E007");
        assert_eq!(e.name, "");
    }

    #[test]
    fn claim_details_default_to_no_images() {
        let d: ClaimDetails = serde_json::from_str(r#"{"amount": 1200}"#).unwrap();
        assert!(d.images.is_empty());
    }

    #[test]
    fn password_change_payload_uses_wire_field_names() {
        let body = serde_json::to_string(&PasswordChange {
            current_password: "old1!",
            new_password: "Abc123!",
        })
        .unwrap();
        assert_eq!(
            body,
            r#"{"currentPassword":"old1!","newPassword":"Abc123!"}"#
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = HttpClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.url("/employee_count"),
            "http://localhost:5000/employee_count"
        );
    }
}
