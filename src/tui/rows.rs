//! Table row adapters for the directory models.

use crate::model::{Claim, Employee, row_key};

use super::table::{SortKey, TableRow};

impl TableRow for Employee {
    fn id(&self) -> u64 {
        row_key(&self.id)
    }

    fn headers() -> Vec<&'static str> {
        vec!["EMPID", "NAME", "EMAIL", "SBU", "PHONE"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.sbu.clone(),
            self.telephone.clone(),
        ]
    }

    fn sort_key(&self, column: usize) -> SortKey {
        SortKey::String(self.cells().get(column).cloned().unwrap_or_default())
    }
}

impl TableRow for Claim {
    fn id(&self) -> u64 {
        row_key(&self.id)
    }

    fn headers() -> Vec<&'static str> {
        vec!["CLAIMID", "EMPID", "EMPLOYEE", "DATE", "AMOUNT", "CATEGORY"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.emp_id.clone(),
            self.employee.clone(),
            self.date.clone(),
            format!("{:.2}", self.amount),
            self.category.clone(),
        ]
    }

    fn sort_key(&self, column: usize) -> SortKey {
        match column {
            4 => SortKey::Float(self.amount),
            _ => SortKey::String(self.cells().get(column).cloned().unwrap_or_default()),
        }
    }
}
