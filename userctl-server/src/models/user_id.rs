//! User identifier parsed from untrusted input

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i32);

impl UserId {
    /// Parse an identifier from a query-string value.
    ///
    /// # Example
    /// ```
    /// use userctl_server::models::UserId;
    ///
    /// assert_eq!(UserId::parse("42").unwrap().get(), 42);
    /// assert!(UserId::parse("").is_err());
    /// assert!(UserId::parse("1; DROP TABLE users").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }

        s.parse::<i32>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id",
                reason: "must be a 32-bit integer",
            })
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_negative_and_padded() {
        assert_eq!(UserId::parse(" 7 ").unwrap().get(), 7);
        assert_eq!(UserId::parse("-3").unwrap().get(), -3);
    }

    #[test]
    fn rejects_non_numeric() {
        let err = UserId::parse("abc").unwrap_err();
        assert_eq!(err.to_string(), "id: must be a 32-bit integer");
    }

    #[test]
    fn rejects_overflow() {
        assert!(UserId::parse("2147483648").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(UserId::parse("").unwrap_err().to_string(), "id cannot be empty");
    }
}
