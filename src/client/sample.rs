//! Offline sample backend.
//!
//! Serves a small fixed directory so the console can be exercised without a
//! running backend. The claim image map is a hard-coded placeholder lookup;
//! a real deployment resolves images through [`super::HttpClient`] instead.

use super::{ClientError, DirectoryProvider, PasswordGateway};
use crate::model::{Claim, Employee, PasswordResponse};

/// The admin password accepted by the sample gateway.
const SAMPLE_ADMIN_PASSWORD: &str = "admin123";

/// In-memory stand-in for the HR backend.
#[derive(Clone)]
pub struct SampleBackend;

impl SampleBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SampleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryProvider for SampleBackend {
    fn employees(&self) -> Result<Vec<Employee>, ClientError> {
        Ok(vec![
            employee("E001", "Jane Dias", "jane@acorn.lk", "Finance", "0771234567"),
            employee("E002", "Ruwan Perera", "ruwan@acorn.lk", "Logistics", "0712345678"),
            employee("E003", "Amali Silva", "amali@acorn.lk", "Finance", "0759876543"),
            employee("E004", "Kasun Fernando", "kasun@acorn.lk", "IT", "0701112223"),
            employee("E005", "Nadee Herath", "nadee@acorn.lk", "HR", "0764455667"),
        ])
    }

    fn claims(&self) -> Result<Vec<Claim>, ClientError> {
        Ok(vec![
            claim("claim1", "E002", "Ruwan Perera", "02-08-2026", 5400.0, "Fuel", "Fuel for client site visits"),
            claim("claim2", "E003", "Amali Silva", "11-08-2026", 2150.5, "OPD", "Clinic charges for August"),
            claim("claim3", "E001", "Jane Dias", "19-08-2026", 860.0, "Stationary", "Printer toner and files"),
        ])
    }

    fn employee_count(&self) -> Result<u64, ClientError> {
        self.employees().map(|e| e.len() as u64)
    }

    fn claim_images(&self, claim_id: &str) -> Result<Vec<String>, ClientError> {
        let images: &[&str] = match claim_id {
            "claim1" => &["../static/img/image1.jpg", "../static/img/image2.jpg"],
            "claim2" => &["../static/img/image3.jpg", "../static/img/image4.jpg"],
            _ => &[],
        };
        Ok(images.iter().map(|s| s.to_string()).collect())
    }

    fn is_live(&self) -> bool {
        false
    }
}

impl PasswordGateway for SampleBackend {
    fn change_password(&self, current: &str, _new: &str) -> Result<PasswordResponse, ClientError> {
        if current == SAMPLE_ADMIN_PASSWORD {
            Ok(PasswordResponse {
                success: true,
                message: Some("Password updated successfully!".to_string()),
                error: None,
            })
        } else {
            Ok(PasswordResponse {
                success: false,
                message: None,
                error: Some("Current password is incorrect. Try again.".to_string()),
            })
        }
    }
}

fn employee(id: &str, name: &str, email: &str, sbu: &str, telephone: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        sbu: sbu.to_string(),
        telephone: telephone.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn claim(
    id: &str,
    emp_id: &str,
    employee: &str,
    date: &str,
    amount: f64,
    category: &str,
    message: &str,
) -> Claim {
    Claim {
        id: id.to_string(),
        emp_id: emp_id.to_string(),
        employee: employee.to_string(),
        date: date.to_string(),
        amount,
        category: category.to_string(),
        message: message.to_string(),
    }
}
