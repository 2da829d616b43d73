use super::Login;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(name: String) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Display name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// A missing or blank name falls back to the login.
    pub fn or_login(name: Option<String>, login: &Login) -> Result<Self, String> {
        match name {
            Some(name) if !name.trim().is_empty() => Self::new(name),
            _ => Ok(Self(login.as_str().to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
