//! Current-month progress for the dashboard strip.

use chrono::{Datelike, NaiveDate};

/// How far the current month has progressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthProgress {
    pub month_name: String,
    pub elapsed_days: u32,
    pub remaining_days: u32,
    pub total_days: u32,
}

impl MonthProgress {
    /// Elapsed fraction in [0, 1] for gauge rendering.
    pub fn ratio(&self) -> f64 {
        if self.total_days == 0 {
            0.0
        } else {
            f64::from(self.elapsed_days) / f64::from(self.total_days)
        }
    }
}

/// Computes elapsed and remaining days of `today`'s month. Today counts as
/// elapsed.
pub fn month_progress(today: NaiveDate) -> MonthProgress {
    let (year, month) = (today.year(), today.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let total_days = first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30);

    MonthProgress {
        month_name: today.format("%B").to_string(),
        elapsed_days: today.day(),
        remaining_days: total_days.saturating_sub(today.day()),
        total_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_month_split() {
        let p = month_progress(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        assert_eq!(p.month_name, "January");
        assert_eq!(p.elapsed_days, 10);
        assert_eq!(p.remaining_days, 21);
        assert_eq!(p.total_days, 31);
    }

    #[test]
    fn leap_february_has_29_days() {
        let p = month_progress(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(p.total_days, 29);
        assert_eq!(p.remaining_days, 0);
    }

    #[test]
    fn december_rolls_into_next_year() {
        let p = month_progress(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(p.total_days, 31);
        assert_eq!(p.remaining_days, 30);
    }
}
