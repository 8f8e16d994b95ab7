//! Console widgets.

mod claim_detail;
mod claims;
mod common;
mod employee_form;
mod employees;
mod header;
mod help;
mod notices;
mod password_form;
mod quit_confirm;
mod summary;

pub use claim_detail::render_claim_detail;
pub use claims::render_claims;
pub use employee_form::render_employee_form;
pub use employees::render_employees;
pub use header::render_header;
pub use help::render_help;
pub use notices::render_notices;
pub use password_form::render_password_form;
pub use quit_confirm::render_quit_confirm;
pub use summary::render_summary;
