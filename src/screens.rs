//! Static descriptions of the login and registration screens.

use serde::Serialize;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

const APP_TITLE: &str = "Habitly";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Password,
    Checkbox,
}

/// One input of a screen. `id` is also the key used in `FormErrors`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub id: &'static str,
    pub kind: InputKind,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthScreen {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: &'static [FieldSpec],
    pub submit_label: &'static str,
    pub submitting_label: &'static str,
    /// Whether the screen renders the live strength meter under the
    /// password input.
    pub strength_meter: bool,
    pub footer_text: &'static str,
    pub footer_link_text: &'static str,
    pub footer_link_href: &'static str,
}

impl AuthScreen {
    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.id == id)
    }
}

pub static LOGIN_SCREEN: AuthScreen = AuthScreen {
    title: APP_TITLE,
    subtitle: "Build consistency. Track progress.",
    fields: &[
        FieldSpec {
            id: "email",
            kind: InputKind::Email,
            label: "Email",
            placeholder: Some("hello@example.com"),
            autocomplete: None,
        },
        FieldSpec {
            id: "password",
            kind: InputKind::Password,
            label: "Password",
            placeholder: Some("••••••••"),
            autocomplete: None,
        },
    ],
    submit_label: "Log In",
    submitting_label: "Logging In...",
    strength_meter: false,
    footer_text: "Don't have an account?",
    footer_link_text: "Sign up",
    footer_link_href: REGISTER_PATH,
};

pub static REGISTER_SCREEN: AuthScreen = AuthScreen {
    title: APP_TITLE,
    subtitle: "Start building better habits today.",
    fields: &[
        FieldSpec {
            id: "name",
            kind: InputKind::Text,
            label: "First Name",
            placeholder: Some("John"),
            autocomplete: Some("given-name"),
        },
        FieldSpec {
            id: "lastName",
            kind: InputKind::Text,
            label: "Last Name",
            placeholder: Some("Doe"),
            autocomplete: Some("family-name"),
        },
        FieldSpec {
            id: "email",
            kind: InputKind::Email,
            label: "Email",
            placeholder: Some("you@example.com"),
            autocomplete: Some("email"),
        },
        FieldSpec {
            id: "password",
            kind: InputKind::Password,
            label: "Password",
            placeholder: Some("••••••••"),
            autocomplete: Some("new-password"),
        },
        FieldSpec {
            id: "terms",
            kind: InputKind::Checkbox,
            label: "I agree to the Terms and Privacy Policy",
            placeholder: None,
            autocomplete: None,
        },
    ],
    submit_label: "Create Account",
    submitting_label: "Creating Account...",
    strength_meter: true,
    footer_text: "Already have an account?",
    footer_link_text: "Log in",
    footer_link_href: LOGIN_PATH,
};
