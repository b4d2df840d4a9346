//! HTTP middleware stack for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. CSP nonce (generate per-request nonce for inline scripts)
//! 5. Security headers (CSP built from the nonce, framing, sniffing)
//! 6. Error page (render marked error responses as HTML)
//! 7. `CatchPanicLayer` (turn handler panics into marked 500s)
//! 8. Rate limiting on form submissions only (governor)

pub mod csp;
pub mod error_page;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use csp::{CspNonce, csp_nonce_middleware};
pub use error_page::error_page_middleware;
pub use rate_limit::form_rate_limiter;
pub use request_id::{RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
