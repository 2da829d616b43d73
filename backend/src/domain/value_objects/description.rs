use serde::{Deserialize, Serialize};

pub const MAX_DESCRIPTION_CHARS: usize = 200;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description(String);

impl Description {
    pub fn new(description: String) -> Result<Self, String> {
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(format!(
                "Description must not exceed {} characters",
                MAX_DESCRIPTION_CHARS
            ));
        }
        Ok(Self(description))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_limit_counts_characters_not_bytes() {
        assert!(Description::new("ж".repeat(200)).is_ok());
        assert!(Description::new("a".repeat(201)).is_err());
    }
}
