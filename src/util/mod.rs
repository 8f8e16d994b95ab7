//! Shared utilities.

mod month;

pub use month::{MonthProgress, month_progress};
