//! Request Field Validation
//!
//! Presence checks only. Email format is deliberately not validated; the
//! public contract has always accepted any non-blank string there.

use crate::error::{IntakeError, IntakeResult};

/// Reject blank (empty or whitespace-only) required fields
pub fn require_present(field: &'static str, value: &str) -> IntakeResult<()> {
    if value.trim().is_empty() {
        return Err(IntakeError::BlankField { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_non_blank() {
        assert!(require_present("name", "Ada").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        let err = require_present("name", "").unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn test_rejects_whitespace_only() {
        assert!(require_present("message", "   \t\n").is_err());
    }

    #[test]
    fn test_email_format_is_not_checked() {
        // Presence only; this is the observed contract.
        assert!(require_present("email", "definitely-not-an-email").is_ok());
    }
}
