use std::fmt;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "habitly_auth=info,tower_http=warn";

/// Installs the global fmt subscriber, filtered by `RUST_LOG` when set.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Sanitized wrapper for email addresses that masks the local part
#[derive(Debug, Clone)]
pub struct SanitizedEmail(String);

impl SanitizedEmail {
    pub fn new(email: impl AsRef<str>) -> Self {
        Self(Self::sanitize(email.as_ref()))
    }

    fn sanitize(email: &str) -> String {
        match email.split_once('@') {
            Some((local, domain)) => {
                let local_len = local.chars().count();
                let masked_local = match local.chars().next() {
                    Some(first) if local_len > 2 => format!("{first}***"),
                    _ => "*".repeat(local_len),
                };
                format!("{masked_local}@{domain}")
            }
            None => "***@***".to_string(),
        }
    }
}

impl fmt::Display for SanitizedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitized wrapper for personal names that keeps only the first and last
/// character
#[derive(Debug, Clone)]
pub struct SanitizedName(String);

impl SanitizedName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Self::sanitize(name.as_ref().trim()))
    }

    fn sanitize(name: &str) -> String {
        let mut chars = name.chars();
        match (chars.next(), chars.next_back()) {
            (Some(first), Some(last)) if name.chars().count() > 4 => format!("{first}***{last}"),
            (Some(first), _) if name.chars().count() > 2 => format!("{first}***"),
            _ => "*".repeat(name.chars().count()),
        }
    }
}

impl fmt::Display for SanitizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Form lifecycle events for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    LoginSubmitted,
    LoginRejected,
    RegistrationSubmitted,
    RegistrationRejected,
    SubmissionFailed,
}

impl FormEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormEvent::LoginSubmitted => "login_submitted",
            FormEvent::LoginRejected => "login_rejected",
            FormEvent::RegistrationSubmitted => "registration_submitted",
            FormEvent::RegistrationRejected => "registration_rejected",
            FormEvent::SubmissionFailed => "submission_failed",
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            FormEvent::LoginRejected | FormEvent::RegistrationRejected | FormEvent::SubmissionFailed
        )
    }
}

impl fmt::Display for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log a form event with sanitized context
#[macro_export]
macro_rules! log_form_event {
    ($event:expr, $($field:tt)*) => {
        if $event.is_warning() {
            tracing::warn!(
                form_event = %$event,
                event_type = "form",
                $($field)*
            );
        } else {
            tracing::info!(
                form_event = %$event,
                event_type = "form",
                $($field)*
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_email() {
        assert_eq!(
            SanitizedEmail::new("user@example.com").to_string(),
            "u***@example.com"
        );
        assert_eq!(SanitizedEmail::new("ab@test.com").to_string(), "**@test.com");
        assert_eq!(SanitizedEmail::new("a@test.com").to_string(), "*@test.com");
        assert_eq!(SanitizedEmail::new("invalid-email").to_string(), "***@***");
    }

    #[test]
    fn test_sanitize_email_multibyte_local_part() {
        assert_eq!(
            SanitizedEmail::new("émilie@example.fr").to_string(),
            "é***@example.fr"
        );
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(SanitizedName::new("Johnny").to_string(), "J***y");
        assert_eq!(SanitizedName::new("Ann").to_string(), "A***");
        assert_eq!(SanitizedName::new("Jo").to_string(), "**");
        assert_eq!(SanitizedName::new("  Zoë  ").to_string(), "Z***");
        assert_eq!(SanitizedName::new("").to_string(), "");
    }

    #[test]
    fn test_rejections_log_as_warnings() {
        assert!(FormEvent::LoginRejected.is_warning());
        assert!(FormEvent::SubmissionFailed.is_warning());
        assert!(!FormEvent::RegistrationSubmitted.is_warning());
    }

    #[test]
    fn test_event_names() {
        assert_eq!(FormEvent::LoginSubmitted.to_string(), "login_submitted");
        assert_eq!(
            FormEvent::RegistrationRejected.as_str(),
            "registration_rejected"
        );
    }
}
