//! Common validation utilities.
//!
//! Custom validators used by the domain request types. Length checks operate
//! on the trimmed value so that whitespace padding cannot satisfy a minimum.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

/// Contact name length bounds (after trimming).
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;

/// Contact message length bounds (after trimming).
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 1000;

/// Maximum email length.
pub const EMAIL_MAX_LEN: usize = 255;

/// Maximum phone length.
pub const PHONE_MAX_LEN: usize = 20;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex");
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Validates a contact name: 2-100 characters after trimming.
pub fn validate_contact_name(name: &str) -> Result<(), ValidationError> {
    let len = name.trim().chars().count();
    if (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        Ok(())
    } else if len < NAME_MIN_LEN {
        Err(error("name_length", "Name must be at least 2 characters"))
    } else {
        Err(error("name_length", "Name too long"))
    }
}

/// Validates an email address: standard pattern, at most 255 characters.
pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(error("email_length", "Email too long"));
    }
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(error("email_format", "Invalid email address"))
    }
}

/// Validates an optional phone number: at most 20 characters.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().chars().count() <= PHONE_MAX_LEN {
        Ok(())
    } else {
        Err(error("phone_length", "Phone number too long"))
    }
}

/// Validates a contact message: 10-1000 characters after trimming.
pub fn validate_contact_message(message: &str) -> Result<(), ValidationError> {
    let len = message.trim().chars().count();
    if (MESSAGE_MIN_LEN..=MESSAGE_MAX_LEN).contains(&len) {
        Ok(())
    } else if len < MESSAGE_MIN_LEN {
        Err(error(
            "message_length",
            "Message must be at least 10 characters",
        ))
    } else {
        Err(error("message_length", "Message too long"))
    }
}

/// Validates a comma-separated list input: at least one non-empty element
/// must remain after splitting and trimming.
pub fn validate_comma_list(input: &str) -> Result<(), ValidationError> {
    if input.split(',').any(|part| !part.trim().is_empty()) {
        Ok(())
    } else {
        Err(error(
            "list_empty",
            "At least one entry is required",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_contact_name() {
        assert!(validate_contact_name("Jo").is_ok());
        assert!(validate_contact_name("Jane Wanjiku").is_ok());
        assert!(validate_contact_name(&"a".repeat(100)).is_ok());
        assert!(validate_contact_name("J").is_err());
        assert!(validate_contact_name("").is_err());
        assert!(validate_contact_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_contact_name_whitespace_only() {
        assert!(validate_contact_name("   ").is_err());
        // Padding does not rescue a too-short name
        assert!(validate_contact_name("  J  ").is_err());
    }

    #[test]
    fn test_validate_email_address() {
        assert!(validate_email_address("jane@example.com").is_ok());
        assert!(validate_email_address("j.doe+tag@mail.co.ke").is_ok());
        assert!(validate_email_address("not-an-email").is_err());
        assert!(validate_email_address("missing@tld").is_err());
        assert!(validate_email_address("@example.com").is_err());
    }

    #[test]
    fn test_validate_email_address_too_long() {
        let local = "a".repeat(250);
        let email = format!("{}@example.com", local);
        assert!(validate_email_address(&email).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("0111679286").is_ok());
        assert!(validate_phone("").is_ok());
        assert!(validate_phone(&"0".repeat(20)).is_ok());
        assert!(validate_phone(&"0".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_contact_message() {
        assert!(validate_contact_message("I need a website built").is_ok());
        assert!(validate_contact_message("too short").is_err());
        assert!(validate_contact_message(&"m".repeat(10)).is_ok());
        assert!(validate_contact_message(&"m".repeat(1000)).is_ok());
        assert!(validate_contact_message(&"m".repeat(1001)).is_err());
    }

    #[test]
    fn test_validate_contact_message_error_message() {
        let err = validate_contact_message("short").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn test_validate_comma_list() {
        assert!(validate_comma_list("React, Node.js").is_ok());
        assert!(validate_comma_list("solo").is_ok());
        assert!(validate_comma_list(", , trailing").is_ok());
        assert!(validate_comma_list("").is_err());
        assert!(validate_comma_list(" , , ").is_err());
    }
}
