use std::fmt;

use serde::Deserialize;

use super::{FormErrors, FormResult, fields};

/// Raw values of the registration screen.
///
/// Field names follow the form (`name`, `lastName`, `email`, `password`,
/// `terms`); `firstName` and `termsAccepted` are accepted as aliases.
#[derive(Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrationInput {
    #[serde(rename = "name", alias = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "terms", alias = "termsAccepted")]
    pub terms_accepted: bool,
}

#[derive(Clone, PartialEq, Eq)]
pub struct CleanRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationInput {
    /// Validates every field independently; the result lists each field's
    /// violations in declaration order.
    pub fn validate(&self) -> FormResult<CleanRegistration> {
        let mut errors = FormErrors::new();

        let first_name = errors.collect(
            "name",
            fields::validate_name(&self.first_name, fields::FIRST_NAME_MESSAGES),
        );
        let last_name = errors.collect(
            "lastName",
            fields::validate_name(&self.last_name, fields::LAST_NAME_MESSAGES),
        );
        let email = errors.collect("email", fields::validate_email(&self.email));
        let password = errors.collect("password", fields::validate_new_password(&self.password));
        let terms = errors.collect("terms", fields::validate_terms(self.terms_accepted));

        let clean = match (first_name, last_name, email, password, terms) {
            (Some(first_name), Some(last_name), Some(email), Some(password), Some(())) => {
                Some(CleanRegistration {
                    first_name,
                    last_name,
                    email,
                    password,
                })
            }
            _ => None,
        };
        errors.into_result(clean)
    }
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("terms_accepted", &self.terms_accepted)
            .finish()
    }
}

impl fmt::Debug for CleanRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanRegistration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            first_name: "Jo".to_string(),
            last_name: "Do".to_string(),
            email: "A@B.COM".to_string(),
            password: "Abcdefg1".to_string(),
            terms_accepted: true,
        }
    }

    #[test]
    fn test_minimal_registration_is_cleaned() {
        let clean = valid_input().validate().unwrap();
        assert_eq!(clean.first_name, "Jo");
        assert_eq!(clean.last_name, "Do");
        assert_eq!(clean.email, "a@b.com");
        assert_eq!(clean.password, "Abcdefg1");
    }

    #[test]
    fn test_unaccepted_terms_is_the_only_violation() {
        let input = RegistrationInput {
            terms_accepted: false,
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();

        let violations: Vec<_> = errors.violations().collect();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "terms");
        assert_eq!(violations[0].message, fields::TERMS_REQUIRED);
    }

    #[test]
    fn test_terms_reported_alongside_other_fields() {
        let errors = RegistrationInput::default().validate().unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["name", "lastName", "email", "password", "terms"]
        );
        assert_eq!(errors.first("terms"), Some(fields::TERMS_REQUIRED));
    }

    #[test]
    fn test_last_name_uses_its_own_length_messages() {
        let input = RegistrationInput {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.first("name"), Some("Must be at least 2 characters"));
        assert_eq!(
            errors.first("lastName"),
            Some("Last name must be at least 2 characters")
        );
    }

    #[test]
    fn test_weak_password_lists_each_missing_class() {
        let input = RegistrationInput {
            password: "abcdefgh".to_string(),
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.messages("password"),
            &[
                fields::PASSWORD_NEEDS_UPPERCASE.to_string(),
                fields::PASSWORD_NEEDS_DIGIT.to_string(),
            ]
        );
    }

    #[test]
    fn test_deserializes_form_field_names() {
        let parsed: RegistrationInput = serde_json::from_str(
            r#"{"name":"Ana","lastName":"Silva","email":"ana@x.io","password":"Secret12","terms":true}"#,
        )
        .unwrap();
        assert_eq!(parsed.first_name, "Ana");
        assert!(parsed.validate().is_ok());

        let aliased: RegistrationInput = serde_json::from_str(
            r#"{"firstName":"Ana","lastName":"Silva","email":"ana@x.io","password":"Secret12","termsAccepted":true}"#,
        )
        .unwrap();
        assert!(aliased.terms_accepted);
    }

    #[test]
    fn test_missing_terms_defaults_to_unaccepted() {
        let parsed: RegistrationInput = serde_json::from_str(
            r#"{"name":"Ana","lastName":"Silva","email":"ana@x.io","password":"Secret12"}"#,
        )
        .unwrap();
        let errors = parsed.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["terms"]);
    }
}
