//! Public Site Route
//!
//! - GET /site/:domain?doctor=..&date=.. - Tenant site with booking widget
//!
//! Unauthenticated. The session cookie is never read here.

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::site::{hero_image, BookingIntent, BookingQuery, SitePage, TenantDomain};
use crate::web::error::{WebError, WebResult};
use crate::web::state::AppState;
use crate::web::views::site::{self, SiteView};

/// Raw, still percent-encoded domain segment of the request path
fn raw_domain_segment(uri: &Uri) -> &str {
    uri.path().strip_prefix("/site/").unwrap_or_default()
}

/// GET /site/:domain
pub async fn public_site(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(query): Query<BookingQuery>,
) -> WebResult<Response> {
    let domain = TenantDomain::from_path_segment(raw_domain_segment(&uri))
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let page = SitePage::from_lookup(state.api.public_site(&domain).await);
    let error_message = page.error_message().unwrap_or("Error");

    let response = match page {
        SitePage::Ready(tenant) => {
            let today = state.clock.today();
            let booking = query
                .is_submitted()
                .then(|| BookingIntent::capture(&query, &tenant, today));
            if let Some(Ok(intent)) = &booking {
                tracing::info!(
                    domain = %domain,
                    doctor = %intent.doctor,
                    date = %intent.date,
                    "Captured booking intent"
                );
            }

            let html = site::render(SiteView {
                site: *tenant,
                action: format!("/site/{}", domain.to_path_segment()),
                hero_image: hero_image(&domain),
                today,
                query,
                booking,
            });
            Html(html).into_response()
        }
        SitePage::NotFound => terminal(StatusCode::NOT_FOUND, error_message),
        SitePage::ConnectionError => terminal(StatusCode::BAD_GATEWAY, error_message),
        SitePage::Loading => {
            return Err(WebError::Internal("site lookup did not resolve".to_string()))
        }
    };

    Ok(response)
}

fn terminal(status: StatusCode, message: &'static str) -> Response {
    (status, Html(site::render_error(message))).into_response()
}
