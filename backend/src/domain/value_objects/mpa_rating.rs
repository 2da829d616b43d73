use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Motion Picture Association rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MpaRating {
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
}

impl MpaRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            MpaRating::G => "G",
            MpaRating::Pg => "PG",
            MpaRating::Pg13 => "PG-13",
            MpaRating::R => "R",
            MpaRating::Nc17 => "NC-17",
        }
    }
}

impl FromStr for MpaRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('_', "-").as_str() {
            "G" => Ok(MpaRating::G),
            "PG" => Ok(MpaRating::Pg),
            "PG-13" => Ok(MpaRating::Pg13),
            "R" => Ok(MpaRating::R),
            "NC-17" => Ok(MpaRating::Nc17),
            other => Err(format!("Unknown MPA rating: {}", other)),
        }
    }
}

impl fmt::Display for MpaRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
