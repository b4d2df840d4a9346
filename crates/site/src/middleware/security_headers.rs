//! Security headers middleware for XSS, clickjacking, and isolation protection.

use axum::{
    extract::Request,
    http::{
        HeaderName, HeaderValue,
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

use super::csp::CspNonce;

/// Build the Content-Security-Policy for a response.
///
/// ```text
/// default-src 'none';
/// script-src 'self' 'nonce-<nonce>';
/// style-src 'self';
/// font-src 'self';
/// img-src 'self' data:;
/// media-src 'self';
/// connect-src 'self';
/// manifest-src 'self';
/// frame-src https://www.google.com;
/// object-src 'none';
/// base-uri 'self';
/// form-action 'self';
/// frame-ancestors 'none'
/// ```
///
/// The map embed on the contact page is the only third-party frame.
#[must_use]
pub fn content_security_policy(nonce: Option<&CspNonce>) -> String {
    let script_src = match nonce {
        Some(n) if !n.value().is_empty() => format!("'self' 'nonce-{}'", n.value()),
        _ => "'self'".to_string(),
    };
    format!(
        "default-src 'none'; \
         script-src {script_src}; \
         style-src 'self'; \
         font-src 'self'; \
         img-src 'self' data:; \
         media-src 'self'; \
         connect-src 'self'; \
         manifest-src 'self'; \
         frame-src https://www.google.com; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'"
    )
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY` - Prevent clickjacking
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `Referrer-Policy: strict-origin-when-cross-origin`
/// - `Content-Security-Policy` - see [`content_security_policy`]
/// - `Permissions-Policy` - Deny sensitive features, allow fullscreen for
///   the map embed
/// - `Cross-Origin-Opener-Policy: same-origin`
///
/// Must run inside `csp_nonce_middleware` so the nonce is in the request
/// extensions.
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let csp = content_security_policy(request.extensions().get::<CspNonce>());

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    match HeaderValue::from_str(&csp) {
        Ok(value) => {
            headers.insert(CONTENT_SECURITY_POLICY, value);
        }
        Err(e) => tracing::error!(error = %e, "Invalid CSP header value"),
    }

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "accelerometer=(), \
             camera=(), \
             display-capture=(), \
             fullscreen=(self), \
             geolocation=(), \
             gyroscope=(), \
             magnetometer=(), \
             microphone=(), \
             payment=(), \
             usb=()",
        ),
    );

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );

    response
}
