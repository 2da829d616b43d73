use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login(String);

impl Login {
    pub fn new(login: String) -> Result<Self, String> {
        if login.trim().is_empty() {
            return Err("Login must be specified".to_string());
        }
        if login.chars().any(char::is_whitespace) {
            return Err("Login cannot contain whitespace".to_string());
        }
        Ok(Self(login))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
