//! acornhr - Interactive console for the Acorn HR admin backend.
//!
//! This library provides the pieces shared by the `acornhr` binary:
//! - `client` - backend access (live HTTP or offline sample data)
//! - `validate` - form field validation rules
//! - `tui` - the interactive console

pub mod client;
pub mod model;
pub mod tui;
pub mod util;
pub mod validate;
