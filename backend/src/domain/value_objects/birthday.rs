use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, String> {
        if date > today {
            return Err(format!("Birthday {} cannot be in the future", date));
        }
        Ok(Self(date))
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}
