use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, failed_rules};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const EMAIL_MAX_CHARS: usize = 100;
pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_MAX_CHARS: usize = 128;

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const EMAIL_TOO_LONG: &str = "Too big: expected string to have <=100 characters";
pub const INVALID_NAME: &str = "Name contains invalid characters";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const LOGIN_PASSWORD_TOO_LONG: &str = "Too big: expected string to have <=128 characters";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_TOO_LONG: &str = "Password must be at most 128 characters";
pub const PASSWORD_NEEDS_UPPERCASE: &str = "Must contain at least one uppercase letter";
pub const PASSWORD_NEEDS_LOWERCASE: &str = "Must contain at least one lowercase letter";
pub const PASSWORD_NEEDS_DIGIT: &str = "Must contain at least one number";
pub const TERMS_REQUIRED: &str = "You must agree to the Terms and Privacy Policy";

// U+FEFF counts as whitespace for form input but is not Unicode White_Space.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\s\x{FEFF}'-]+$").expect("name pattern is valid")
});

// Lookaheads are not available, so the leading-dot and double-dot
// restrictions on the local part are checked in `is_valid_email`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Length in UTF-16 code units, the unit browser form limits use. A
/// character outside the Basic Multilingual Plane counts as two.
pub(crate) fn form_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Strips surrounding whitespace, including a byte-order mark pasted in
/// front of the value.
pub(crate) fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Cleaned form of an email address: surrounding whitespace removed and
/// lower-cased. Applying it twice yields the same value.
pub fn normalize_email(raw: &str) -> String {
    trim_input(raw).to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

/// Normalizes then checks an email address. The grammar check only runs
/// once the length limit is satisfied.
pub fn validate_email(raw: &str) -> Result<String, Vec<String>> {
    let email = normalize_email(raw);

    let len = form_len(&email);
    if len > EMAIL_MAX_CHARS {
        tracing::debug!(length = len, "Email validation failed: too long");
        return Err(vec![EMAIL_TOO_LONG.to_string()]);
    }

    if !is_valid_email(&email) {
        tracing::debug!(length = len, "Email validation failed: does not match grammar");
        return Err(vec![INVALID_EMAIL.to_string()]);
    }

    Ok(email)
}

/// Length messages for one of the name fields.
#[derive(Debug, Clone, Copy)]
pub struct NameMessages {
    pub too_short: &'static str,
    pub too_long: &'static str,
}

pub const FIRST_NAME_MESSAGES: NameMessages = NameMessages {
    too_short: "Must be at least 2 characters",
    too_long: "Must be at most 50 characters",
};

pub const LAST_NAME_MESSAGES: NameMessages = NameMessages {
    too_short: "Last name must be at least 2 characters",
    too_long: "Last name must be at most 50 characters",
};

pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Trims a personal name, then checks its length and character set.
/// Every failing rule is reported.
pub fn validate_name(raw: &str, messages: NameMessages) -> Result<String, Vec<String>> {
    let name = trim_input(raw);
    let rules = [
        Rule::new(|v| form_len(v) >= NAME_MIN_CHARS, messages.too_short),
        Rule::new(|v| form_len(v) <= NAME_MAX_CHARS, messages.too_long),
        Rule::new(is_valid_name, INVALID_NAME),
    ];

    let failures = failed_rules(name, &rules);
    if failures.is_empty() {
        Ok(name.to_string())
    } else {
        tracing::debug!(
            length = form_len(name),
            failed = failures.len(),
            "Name validation failed"
        );
        Err(failures)
    }
}

/// Presence check only; login does not judge strength.
pub fn validate_login_password(password: &str) -> Result<String, Vec<String>> {
    let rules = [
        Rule::new(|v| !v.is_empty(), PASSWORD_REQUIRED),
        Rule::new(|v| form_len(v) <= PASSWORD_MAX_CHARS, LOGIN_PASSWORD_TOO_LONG),
    ];

    let failures = failed_rules(password, &rules);
    if failures.is_empty() {
        Ok(password.to_string())
    } else {
        Err(failures)
    }
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Acceptance rules for a password chosen at registration. Special
/// characters are not required here even though they raise the strength
/// meter.
pub fn validate_new_password(password: &str) -> Result<String, Vec<String>> {
    let rules = [
        Rule::new(|v| form_len(v) >= PASSWORD_MIN_CHARS, PASSWORD_TOO_SHORT),
        Rule::new(|v| form_len(v) <= PASSWORD_MAX_CHARS, PASSWORD_TOO_LONG),
        Rule::new(has_uppercase, PASSWORD_NEEDS_UPPERCASE),
        Rule::new(has_lowercase, PASSWORD_NEEDS_LOWERCASE),
        Rule::new(has_digit, PASSWORD_NEEDS_DIGIT),
    ];

    let failures = failed_rules(password, &rules);
    if failures.is_empty() {
        Ok(password.to_string())
    } else {
        tracing::debug!(
            length = form_len(password),
            has_uppercase = has_uppercase(password),
            has_lowercase = has_lowercase(password),
            has_digit = has_digit(password),
            "Password validation failed"
        );
        Err(failures)
    }
}

pub fn validate_terms(accepted: bool) -> Result<(), Vec<String>> {
    if accepted {
        Ok(())
    } else {
        Err(vec![TERMS_REQUIRED.to_string()])
    }
}
