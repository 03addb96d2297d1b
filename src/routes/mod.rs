use std::sync::Arc;

use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    middleware,
    response::Redirect,
    routing::get,
};

use crate::gateway::{AuthGateway, SimulatedGateway};
use crate::screens::LOGIN_PATH;
use crate::security;

pub mod auth;

/// Shared handler state, injected as an `Extension`.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn AuthGateway>,
}

impl AppState {
    pub fn new(gateway: impl AuthGateway + 'static) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    pub fn simulated(delay: std::time::Duration) -> Self {
        Self::new(SimulatedGateway::new(delay))
    }
}

pub fn create_router() -> Router {
    tracing::debug!("Creating application router");
    Router::new()
        .route("/", get(redirect_to_login))
        .merge(auth::router())
}

/// Router with the middleware stack and state every deployment uses.
pub fn build_app(state: AppState) -> Router {
    create_router()
        .layer(middleware::from_fn(security::headers::set_security_headers))
        .layer(DefaultBodyLimit::max(security::json::MAX_BODY_SIZE_BYTES))
        .layer(Extension(state))
}

async fn redirect_to_login() -> Redirect {
    Redirect::temporary(LOGIN_PATH)
}
