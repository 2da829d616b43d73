use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The first public film screening. Release dates must come strictly after it.
pub fn cinema_birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 25).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDate(NaiveDate);

impl ReleaseDate {
    pub fn new(date: NaiveDate) -> Result<Self, String> {
        if date <= cinema_birthday() {
            return Err("Release date must be after 1895-12-25".to_string());
        }
        Ok(Self(date))
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}
