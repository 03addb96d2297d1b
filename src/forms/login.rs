use std::fmt;

use serde::Deserialize;

use super::{FormErrors, FormResult, fields};

/// Raw values of the login screen. Missing fields arrive empty.
#[derive(Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login values after validation; the email is normalized.
#[derive(Clone, PartialEq, Eq)]
pub struct CleanLogin {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn validate(&self) -> FormResult<CleanLogin> {
        let mut errors = FormErrors::new();

        let email = errors.collect("email", fields::validate_email(&self.email));
        let password = errors.collect("password", fields::validate_login_password(&self.password));

        let clean = match (email, password) {
            (Some(email), Some(password)) => Some(CleanLogin { email, password }),
            _ => None,
        };
        errors.into_result(clean)
    }
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

impl fmt::Debug for CleanLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanLogin")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}
