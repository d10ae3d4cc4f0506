//! Daily motivational quote

use chrono::{Datelike, NaiveDate};

use crate::catalog::QUOTES;
use crate::models::Quote;

/// Quote for a calendar day, rotating on the day of the month
pub fn daily_quote(date: NaiveDate) -> Quote {
    QUOTES[date.day() as usize % QUOTES.len()]
}
