use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(email: String) -> Result<Self, String> {
        let email = email.trim();
        if email.chars().any(char::is_whitespace) {
            return Err("Invalid email format".to_string());
        }
        let (local, domain) = email
            .split_once('@')
            .ok_or_else(|| "Invalid email format".to_string())?;
        if local.is_empty()
            || domain.is_empty()
            || domain.contains('@')
            || domain.starts_with('.')
            || domain.ends_with('.')
            || domain.contains("..")
        {
            return Err("Invalid email format".to_string());
        }
        Ok(Self(email.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_lowercased() {
        let email = Email::new("Ann@Example.COM".to_string()).unwrap();
        assert_eq!(email.as_str(), "ann@example.com");
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        for bad in ["", "plain", "@example.com", "ann@", "ann@@example.com", "an n@example.com", "ann@.com", "ann@example..com"] {
            assert!(Email::new(bad.to_string()).is_err(), "{bad} should be rejected");
        }
    }
}
