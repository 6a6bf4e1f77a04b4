//! Clinic backend REST client
//!
//! One request per call. No retries.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use super::dto::{decode_appointments, RawSiteData, TokenResponse};
use super::error::{AuthError, FetchError, SiteError};
use crate::models::{AppointmentRecord, TenantSiteConfig};
use crate::site::TenantDomain;

/// Opaque bearer token issued at login
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Operations the pages need from the clinic backend
#[async_trait]
pub trait ClinicApi: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError>;

    /// Appointments visible to the token's clinic, in backend order
    async fn list_appointments(&self, token: &str) -> Result<Vec<AppointmentRecord>, FetchError>;

    /// Public site data of one tenant
    async fn public_site(&self, domain: &TenantDomain) -> Result<TenantSiteConfig, SiteError>;

    /// Backend heartbeat
    async fn health(&self) -> Result<(), FetchError>;
}

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Per-request timeout; transport default when unset
    pub request_timeout: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout: None,
        }
    }
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// [`ClinicApi`] over HTTP
pub struct HttpClinicApi {
    client: Client,
    base_url: String,
}

impl HttpClinicApi {
    pub fn new(config: &BackendConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ClinicApi for HttpClinicApi {
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::info!(status = response.status().as_u16(), "Login rejected by backend");
            return Err(AuthError::InvalidCredentials);
        }

        let body: TokenResponse = response.json().await?;
        Ok(AccessToken::new(body.access_token))
    }

    async fn list_appointments(&self, token: &str) -> Result<Vec<AppointmentRecord>, FetchError> {
        let response = self
            .client
            .get(self.url("/appointments/"))
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let items: Vec<Value> = response.json().await?;
                Ok(decode_appointments(items))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(FetchError::Unauthorized),
            status => {
                tracing::warn!(status = status.as_u16(), "Appointment fetch failed");
                Err(FetchError::Status(status.as_u16()))
            }
        }
    }

    async fn public_site(&self, domain: &TenantDomain) -> Result<TenantSiteConfig, SiteError> {
        let url = self.url(&format!("/public/sites/{}", domain.to_path_segment()));
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            tracing::info!(
                domain = %domain,
                status = response.status().as_u16(),
                "Public site not found"
            );
            return Err(SiteError::NotFound);
        }

        let raw: RawSiteData = response.json().await?;
        Ok(raw.into())
    }

    async fn health(&self) -> Result<(), FetchError> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(FetchError::Status(response.status().as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode as AxumStatus},
        response::IntoResponse,
        routing::{get, post},
        Form, Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    async fn mock_login(Form(form): Form<HashMap<String, String>>) -> impl IntoResponse {
        let ok = form.get("username").map(String::as_str) == Some("admin@dental.cl")
            && form.get("password").map(String::as_str) == Some("secreto");
        if ok {
            Json(json!({"access_token": "tok-123", "token_type": "bearer"})).into_response()
        } else {
            (AxumStatus::UNAUTHORIZED, Json(json!({"detail": "Credenciales incorrectas"})))
                .into_response()
        }
    }

    async fn mock_appointments(headers: HeaderMap) -> impl IntoResponse {
        let auth = headers.get("authorization").and_then(|v| v.to_str().ok());
        match auth {
            Some("Bearer tok-123") => Json(json!([
                {"id": "a1", "start_time": "2025-12-16T09:00:00", "patient_name": "Ana"},
                {"id": "a2", "start_time": "???", "patient_name": "Bruno"},
                {"id": "a3", "start_time": "2025-12-19T14:00:00Z", "patient_name": "Carla"}
            ]))
            .into_response(),
            Some("Bearer forbidden") => AxumStatus::FORBIDDEN.into_response(),
            Some("Bearer broken") => AxumStatus::INTERNAL_SERVER_ERROR.into_response(),
            _ => AxumStatus::UNAUTHORIZED.into_response(),
        }
    }

    async fn mock_site(Path(domain): Path<String>) -> impl IntoResponse {
        if domain == "clínica sonrisa" {
            Json(json!({
                "clinic_name": "Clínica Sonrisa",
                "address": "Av. Providencia 123",
                "phone": "+56 2 2345 6789",
                "config": {"primary_color": "#0D9488", "welcome_text": "Tu sonrisa primero"},
                "doctors": [{"full_name": "Dra. Ana Pérez"}]
            }))
            .into_response()
        } else {
            (AxumStatus::NOT_FOUND, Json(json!({"detail": "Sitio no encontrado"}))).into_response()
        }
    }

    async fn spawn_backend() -> String {
        let router = Router::new()
            .route("/auth/login", post(mock_login))
            .route("/appointments/", get(mock_appointments))
            .route("/public/sites/:domain", get(mock_site))
            .route("/healthz", get(|| async { Json(json!({"status": "ok"})) }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    async fn client() -> HttpClinicApi {
        HttpClinicApi::new(&BackendConfig::new(spawn_backend().await)).unwrap()
    }

    fn unreachable() -> HttpClinicApi {
        HttpClinicApi::new(&BackendConfig::new("http://127.0.0.1:1")).unwrap()
    }

    #[test]
    fn test_base_url_is_trimmed() {
        let api = HttpClinicApi::new(&BackendConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(api.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AccessToken::new("tok-123");
        assert!(!format!("{:?}", token).contains("tok-123"));
    }

    #[tokio::test]
    async fn test_login_success() {
        let api = client().await;
        let token = api.login("admin@dental.cl", "secreto").await.unwrap();
        assert_eq!(token.as_str(), "tok-123");
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let api = client().await;
        let err = api.login("admin@dental.cl", "otra").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_network_failure() {
        let err = unreachable().login("a", "b").await.unwrap_err();
        assert!(matches!(err, AuthError::NetworkFailure(_)));
    }

    #[tokio::test]
    async fn test_list_appointments_drops_invalid() {
        let api = client().await;
        let records = api.list_appointments("tok-123").await.unwrap();
        let names: Vec<_> = records.iter().map(|r| r.patient_name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Carla"]);
    }

    #[tokio::test]
    async fn test_list_appointments_errors() {
        let api = client().await;
        assert!(matches!(
            api.list_appointments("expired").await,
            Err(FetchError::Unauthorized)
        ));
        assert!(matches!(
            api.list_appointments("forbidden").await,
            Err(FetchError::Unauthorized)
        ));
        assert!(matches!(
            api.list_appointments("broken").await,
            Err(FetchError::Status(500))
        ));
        assert!(matches!(
            unreachable().list_appointments("tok-123").await,
            Err(FetchError::Network(_))
        ));
    }

    #[tokio::test]
    async fn test_public_site_encodes_domain() {
        let api = client().await;
        let domain = TenantDomain::new("clínica sonrisa").unwrap();
        let site = api.public_site(&domain).await.unwrap();
        assert_eq!(site.clinic_name, "Clínica Sonrisa");
        assert_eq!(site.primary_color.as_str(), "#0D9488");
        assert_eq!(site.doctors.len(), 1);
    }

    #[tokio::test]
    async fn test_public_site_errors() {
        let api = client().await;
        let missing = TenantDomain::new("no-existe").unwrap();
        assert!(matches!(api.public_site(&missing).await, Err(SiteError::NotFound)));
        assert!(matches!(
            unreachable().public_site(&missing).await,
            Err(SiteError::NetworkFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_health() {
        assert!(client().await.health().await.is_ok());
        assert!(unreachable().health().await.is_err());
    }
}
