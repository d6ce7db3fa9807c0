//! Due-date arithmetic.
//!
//! Plain calendar-day addition — no business-day logic, no timezone
//! normalization.

use chrono::{Duration, NaiveDate};

/// Payment due date: send date plus the net-payment term.
pub fn due_date(send_on: NaiveDate, net_payment_days: i64) -> NaiveDate {
    send_on + Duration::days(net_payment_days)
}

/// Whether a due date has passed.
pub fn is_overdue(due: NaiveDate, today: NaiveDate) -> bool {
    today > due
}

/// Days past the due date, zero when not yet due.
pub fn days_overdue(due: NaiveDate, today: NaiveDate) -> i64 {
    (today - due).num_days().max(0)
}
