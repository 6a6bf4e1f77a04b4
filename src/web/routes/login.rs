//! Login Routes
//!
//! - GET /        - Login form
//! - POST /       - Login submit
//! - POST /logout - End the session

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::backend::AuthError;
use crate::session::SessionContext;
use crate::web::state::AppState;
use crate::web::views::login::{self, LoginView};

pub const INVALID_CREDENTIALS: &str = "Credenciales incorrectas";
pub const CONNECTION_ERROR: &str = "Error de conexión con el servidor";
pub const SESSION_EXPIRED: &str = "Tu sesión expiró. Ingresa nuevamente.";

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub expired: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// GET /
pub async fn login_page(Query(query): Query<LoginQuery>) -> Html<String> {
    let expired = query.expired.is_some_and(|v| v != "0");
    Html(login::render(LoginView {
        notice: expired.then(|| SESSION_EXPIRED.to_string()),
        ..Default::default()
    }))
}

/// POST /
///
/// The token is written only after the backend accepts the credentials.
pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    mut session: SessionContext,
    Form(form): Form<LoginForm>,
) -> Response {
    let failure = match state.api.login(&form.username, &form.password).await {
        Ok(token) => {
            session.establish(token.as_str());
            tracing::info!(username = %form.username, "Login succeeded");
            return (session, Redirect::to("/dashboard")).into_response();
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::info!(username = %form.username, "Login rejected");
            (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS)
        }
        Err(AuthError::NetworkFailure(e)) => {
            tracing::warn!(error = %e, "Login failed to reach backend");
            (StatusCode::BAD_GATEWAY, CONNECTION_ERROR)
        }
    };

    let (status, message) = failure;
    let page = login::render(LoginView {
        username: form.username,
        password: form.password,
        alert: Some(message.to_string()),
        notice: None,
    });
    (status, Html(page)).into_response()
}

/// POST /logout
pub async fn logout(mut session: SessionContext) -> impl IntoResponse {
    session.teardown();
    tracing::info!("Session ended");
    (session, Redirect::to("/"))
}
