use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::forms::FormFeedback;
use crate::forms::login::LoginInput;
use crate::forms::register::RegistrationInput;
use crate::logging::{FormEvent, SanitizedEmail, SanitizedName};
use crate::routes::AppState;
use crate::screens::{LOGIN_PATH, LOGIN_SCREEN, REGISTER_PATH, REGISTER_SCREEN};
use crate::security::json::FormJson;
use crate::strength::{StrengthResult, score_password};

pub fn router() -> Router {
    Router::new()
        .route(LOGIN_PATH, get(login_screen).post(login))
        .route("/login/validate", post(validate_login))
        .route(REGISTER_PATH, get(register_screen).post(register))
        .route("/register/validate", post(validate_registration))
        .route("/password-strength", post(password_strength))
}

async fn login_screen() -> impl IntoResponse {
    Json(&LOGIN_SCREEN)
}

async fn register_screen() -> impl IntoResponse {
    Json(&REGISTER_SCREEN)
}

#[tracing::instrument(name = "login_submit", skip(state, payload), fields(email))]
pub async fn login(
    Extension(state): Extension<AppState>,
    FormJson(payload): FormJson<LoginInput>,
) -> Result<impl IntoResponse, AppError> {
    let email = SanitizedEmail::new(payload.email.trim());
    tracing::Span::current().record("email", tracing::field::display(&email));

    let credentials = payload.validate().map_err(|errors| {
        crate::log_form_event!(
            FormEvent::LoginRejected,
            email = %email,
            field_count = errors.len(),
            fields = %errors.fields().collect::<Vec<_>>().join(","),
            "Login form rejected"
        );
        AppError::from(errors)
    })?;

    state.gateway.login(&credentials).await?;

    crate::log_form_event!(
        FormEvent::LoginSubmitted,
        email = %email,
        "Login form submitted"
    );

    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(name = "register_submit", skip(state, payload), fields(email))]
pub async fn register(
    Extension(state): Extension<AppState>,
    FormJson(payload): FormJson<RegistrationInput>,
) -> Result<impl IntoResponse, AppError> {
    let email = SanitizedEmail::new(payload.email.trim());
    tracing::Span::current().record("email", tracing::field::display(&email));

    let registration = payload.validate().map_err(|errors| {
        crate::log_form_event!(
            FormEvent::RegistrationRejected,
            email = %email,
            field_count = errors.len(),
            fields = %errors.fields().collect::<Vec<_>>().join(","),
            "Registration form rejected"
        );
        AppError::from(errors)
    })?;

    state.gateway.register(&registration).await?;

    crate::log_form_event!(
        FormEvent::RegistrationSubmitted,
        email = %email,
        first_name = %SanitizedName::new(&registration.first_name),
        "Registration form submitted"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Re-runs the login validators after an input change.
async fn validate_login(FormJson(payload): FormJson<LoginInput>) -> Json<FormFeedback> {
    Json(FormFeedback::from_result(payload.validate()))
}

/// Re-runs the registration validators after an input change; the strength
/// meter is recomputed alongside, independently of acceptance.
async fn validate_registration(
    FormJson(payload): FormJson<RegistrationInput>,
) -> Json<FormFeedback> {
    let strength = score_password(&payload.password);
    Json(FormFeedback::from_result(payload.validate()).with_strength(strength))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StrengthRequest {
    #[serde(default)]
    password: String,
}

async fn password_strength(FormJson(payload): FormJson<StrengthRequest>) -> Json<StrengthResult> {
    Json(score_password(&payload.password))
}
