use serde::{Deserialize, Serialize};
use std::fmt;

/// Genre ids come from the client, so unlike film and user ids they are
/// checked for positivity on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GenreId(u64);

impl GenreId {
    pub fn new(id: u64) -> Result<Self, String> {
        if id == 0 {
            return Err("Genre id must be positive".to_string());
        }
        Ok(Self(id))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
