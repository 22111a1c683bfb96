//! Field validation shared by the catalog entities.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DomainError, DomainResult};

/// Pattern a supplier contact email must match: `local@domain.tld`, no whitespace.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Reject empty or whitespace-only text, failing with `message`.
pub fn require_non_empty(value: &str, message: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(message));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate an optional email. Absent and empty values are accepted.
pub fn validate_email(email: Option<&str>) -> DomainResult<()> {
    match email {
        Some(e) if !e.is_empty() && !is_valid_email(e) => {
            Err(DomainError::validation("Invalid email format"))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_non_empty("   ", "Category name is required").is_err());
        assert!(require_non_empty("", "Category name is required").is_err());
        assert!(require_non_empty("Analgesics", "Category name is required").is_ok());
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("ventas@farmaco.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(!is_valid_email("ventas@farmaco"));
        assert!(!is_valid_email("ventas farmaco@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@@example.com"));
    }

    #[test]
    fn optional_email_accepts_absent_and_empty() {
        assert!(validate_email(None).is_ok());
        assert!(validate_email(Some("")).is_ok());
        assert_eq!(
            validate_email(Some("broken")),
            Err(DomainError::validation("Invalid email format"))
        );
    }
}
