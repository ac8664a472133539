use chrono::NaiveDate;
use serde::Serialize;

use crate::utils::date;

/// Selectable range written to the date control (`min` / `max`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateWindow {
    /// A window that admits exactly one day.
    pub fn single(day: NaiveDate) -> Self {
        Self { min: day, max: day }
    }

    /// Today only, in the local zone.
    pub fn today() -> Self {
        Self::single(date::today())
    }

    pub fn min_attr(&self) -> String {
        date::format_date(self.min)
    }

    pub fn max_attr(&self) -> String {
        date::format_date(self.max)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.min <= day && day <= self.max
    }
}
