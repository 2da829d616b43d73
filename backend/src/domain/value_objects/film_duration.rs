use serde::{Deserialize, Serialize};

/// Running time in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmDuration(u32);

impl FilmDuration {
    pub fn new(minutes: i64) -> Result<Self, String> {
        if minutes <= 0 {
            return Err("Film duration must be positive".to_string());
        }
        u32::try_from(minutes)
            .map(Self)
            .map_err(|_| "Film duration too long".to_string())
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}
