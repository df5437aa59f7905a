// ============================================================================
// VALIDATION - Field checks shared by the forms
// ============================================================================

use std::collections::BTreeMap;

use regex::Regex;

lazy_static::lazy_static! {
    // Unanchored on purpose: any `x@y.z` run inside the value is accepted
    static ref EMAIL_RE: Regex = Regex::new(r"\S+@\S+\.\S+").expect("email pattern");
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("phone pattern");
}

pub const MIN_PASSWORD_LEN: usize = 6;

pub const MSG_EMAIL_REQUIRED: &str = "Valid email is required";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const MSG_HOSPITAL_NAME_REQUIRED: &str = "Hospital name is required";
pub const MSG_PHONE_REQUIRED: &str = "Valid phone number is required";
pub const MSG_ADDRESS_REQUIRED: &str = "Address is required";

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty() && PHONE_RE.is_match(phone)
}

/// Length in UTF-16 code units, the way the browser measures input values
pub fn is_valid_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LEN
}

/// Per-field error messages keyed by form field name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.set(field, message);
        errors
    }

    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    /// Editing a field drops its message
    pub fn clear(&mut self, field: &str) {
        self.fields.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern_matches_loose_shape() {
        assert!(is_valid_email("donor@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("donor@example"));
        assert!(!is_valid_email("donor.example.com"));
        assert!(!is_valid_email("@ .com"));
    }

    #[test]
    fn phone_needs_ten_allowed_characters() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("9876543210"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("++1234567890"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn password_length_counts_utf16_units() {
        assert!(is_valid_password("secret"));
        assert!(!is_valid_password("short"));
        assert!(is_valid_password("ñññððð"));
        // Astral characters are two units each
        assert!(is_valid_password("😀😀😀"));
        assert!(!is_valid_password("😀😀"));
    }

    #[test]
    fn form_errors_track_fields() {
        let mut errors = FormErrors::single("email", MSG_EMAIL_REQUIRED);
        errors.set("password", MSG_PASSWORD_TOO_SHORT);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some(MSG_EMAIL_REQUIRED));
        errors.clear("email");
        assert!(!errors.has("email"));
        assert!(errors.clone().into_result().is_err());
        errors.clear("password");
        assert!(errors.into_result().is_ok());
    }
}
