//! Integration tests for the Gearbox Auto Repair site.
//!
//! Requests go through the full router and middleware stack in process,
//! with the checked-in `content/` and `static/` directories of the site
//! crate.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gearbox-integration-tests
//! ```

use std::path::PathBuf;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use gearbox_site::config::{SentryConfig, SiteConfig};
use gearbox_site::state::AppState;
use tower::ServiceExt;
use url::Url;

/// Base URL used for canonical links in tests.
pub const BASE_URL: &str = "https://gearboxauto.example";

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Header value as a string, empty when missing.
    #[must_use]
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    /// How many times `needle` appears in the body.
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.body.matches(needle).count()
    }
}

/// The site router plus the client address sent with form posts.
pub struct TestApp {
    router: Router,
    client_ip: String,
}

impl TestApp {
    /// Build the app from the site crate's checked-in content.
    #[must_use]
    pub fn new() -> Self {
        Self::with_client_ip("203.0.113.10")
    }

    /// Build the app, posting forms as `client_ip`.
    #[must_use]
    pub fn with_client_ip(client_ip: &str) -> Self {
        Self {
            router: gearbox_site::app(AppState::load(config())),
            client_ip: client_ip.to_string(),
        }
    }

    /// `GET path`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::get(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    /// `POST path` with a urlencoded form body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let request = Request::post(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("x-forwarded-for", &self.client_ip)
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Send any request through the router.
    ///
    /// # Panics
    ///
    /// Panics if the body cannot be read.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Site configuration pointing at the site crate's directories.
///
/// # Panics
///
/// Panics if [`BASE_URL`] does not parse.
#[must_use]
pub fn config() -> SiteConfig {
    let site_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site");
    SiteConfig {
        host: [127, 0, 0, 1].into(),
        port: 3000,
        base_url: Url::parse(BASE_URL).expect("valid base url"),
        content_dir: site_dir.join("content"),
        static_dir: site_dir.join("static"),
        sentry: SentryConfig::default(),
    }
}

/// The next day after today the shop is open.
#[must_use]
pub fn next_open_day() -> chrono::NaiveDate {
    use chrono::{Datelike, Days, Weekday};

    let mut day = chrono::Local::now().date_naive();
    loop {
        day = day + Days::new(1);
        if day.weekday() != Weekday::Sun {
            return day;
        }
    }
}

/// The next Sunday after today.
#[must_use]
pub fn next_sunday() -> chrono::NaiveDate {
    use chrono::{Datelike, Days, Weekday};

    let mut day = chrono::Local::now().date_naive();
    loop {
        day = day + Days::new(1);
        if day.weekday() == Weekday::Sun {
            return day;
        }
    }
}

/// `text` as askama's HTML escaper writes it (`&` becomes `&#38;`).
#[must_use]
pub fn html_escaped(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&#38;"),
            '<' => out.push_str("&#60;"),
            '>' => out.push_str("&#62;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
