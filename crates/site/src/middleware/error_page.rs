//! Renders the HTML error page for responses marked with [`ErrorPage`].
//!
//! Handlers, the 404 fallback and the panic handler only attach the marker.
//! The page itself needs the request's URL, ID and CSP nonce, which are
//! available here. 429s from the form rate limiter are rendered too.

use askama::Template;
use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

use super::{CspNonce, RequestId};
use crate::error::{ErrorPage, ErrorTemplate};
use crate::layout::PageContext;
use crate::state::AppState;

/// Replace marked error responses with the rendered error page.
///
/// Must run inside `request_id_middleware` and `csp_nonce_middleware`.
pub async fn error_page_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let retry_href = request
        .uri()
        .path_and_query()
        .map_or_else(|| path.clone(), |pq| pq.as_str().to_string());
    let nonce = request
        .extensions()
        .get::<CspNonce>()
        .cloned()
        .unwrap_or_else(|| CspNonce(String::new()));
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.as_str().to_string())
        .unwrap_or_default();

    let response = next.run(request).await;

    let error = match response.extensions().get::<ErrorPage>() {
        Some(page) => page.clone(),
        None if response.status() == StatusCode::TOO_MANY_REQUESTS => ErrorPage::rate_limited(),
        None => return response,
    };
    let retry_after = response.headers().get(header::RETRY_AFTER).cloned();

    let template = ErrorTemplate {
        page: PageContext::new(&state, &nonce, &path).seo(|seo| seo.title(error.title).noindex()),
        error: error.clone(),
        retry_href,
        request_id,
    };

    let mut rendered = match template.render() {
        Ok(html) => (error.status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render error page");
            (error.status, error.message.clone()).into_response()
        }
    };
    if let Some(value) = retry_after {
        rendered.headers_mut().insert(header::RETRY_AFTER, value);
    }
    rendered
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    rendered.extensions_mut().insert(error);
    rendered
}
