//! Contact and appointment form submissions.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use gearbox_core::catalog;
use gearbox_integration_tests::{TestApp, html_escaped, next_open_day, next_sunday};

#[tokio::test]
async fn test_contact_form_renders_empty() {
    let app = TestApp::new();
    let res = app.get("/contact").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("action=\"/contact\""));
    assert_eq!(res.count("class=\"field-error\""), 0);
}

#[tokio::test]
async fn test_contact_invalid_shows_three_field_errors() {
    let app = TestApp::new();
    let res = app
        .post_form(
            "/contact",
            &[("name", ""), ("email", "x"), ("message", "hi")],
        )
        .await;

    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.count("class=\"field-error\""), 3);
    assert!(res.body.contains("id=\"name-error\""));
    assert!(res.body.contains("id=\"email-error\""));
    assert!(res.body.contains("id=\"message-error\""));
    assert!(res.body.contains("Please fix 3 problems below."));
    assert!(!res.body.contains("Thank you for your message!"));
    // Submitted values are kept
    assert!(res.body.contains(">hi</textarea>"));
    assert!(res.body.contains("value=\"x\""));
}

#[tokio::test]
async fn test_contact_valid_shows_success() {
    let app = TestApp::new();
    let res = app
        .post_form(
            "/contact",
            &[
                ("name", "Dana Smith"),
                ("email", "dana@example.com"),
                ("phone", "(541) 555-0100"),
                ("subject", "Quote request"),
                ("message", "How much is a timing belt for a 2012 Civic?"),
            ],
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Thank you for your message!"));
    assert_eq!(res.count("class=\"field-error\""), 0);
    // The form is cleared after success
    assert!(!res.body.contains("dana@example.com\""));
}

#[tokio::test]
async fn test_appointment_preselects_service() {
    let app = TestApp::new();
    let service = &catalog::services()[1];
    let res = app.get(&format!("/appointment?service={}", service.id)).await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains(&format!("<option value=\"{}\" selected>", service.id)));
    assert_eq!(res.count(" selected>"), 1);
}

#[tokio::test]
async fn test_appointment_unknown_service_preselects_nothing() {
    let app = TestApp::new();
    let res = app.get("/appointment?service=warp-drive").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.count(" selected>"), 0);
}

#[tokio::test]
async fn test_appointment_valid_booking() {
    let app = TestApp::new();
    let service = &catalog::services()[0];
    let date = next_open_day();
    let res = app
        .post_form(
            "/appointment",
            &[
                ("name", "Sam Lee"),
                ("email", "sam@example.com"),
                ("phone", "541-555-0142"),
                ("service", service.id),
                ("vehicle_make", "Toyota"),
                ("vehicle_model", "Corolla"),
                ("vehicle_year", "2015"),
                ("date", &date.format("%Y-%m-%d").to_string()),
                ("time", "09:00"),
                ("notes", ""),
            ],
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("You're booked in"));
    assert!(res.body.contains(&html_escaped(service.title)));
    assert!(res.body.contains(&date.format("%A, %B %-d, %Y").to_string()));
    assert!(!res.body.contains("action=\"/appointment\""));
}

#[tokio::test]
async fn test_appointment_invalid_booking() {
    let app = TestApp::new();
    let res = app
        .post_form(
            "/appointment",
            &[
                ("name", "Sam Lee"),
                ("email", "sam@example"),
                ("phone", ""),
                ("service", "warp-drive"),
                ("vehicle_year", "15"),
                ("date", &next_sunday().format("%Y-%m-%d").to_string()),
                ("time", "03:00"),
            ],
        )
        .await;

    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    for field in ["email", "phone", "service", "vehicle_year", "date", "time"] {
        assert!(
            res.body.contains(&format!("id=\"{field}-error\"")),
            "missing error for {field}"
        );
    }
    assert!(!res.body.contains("id=\"name-error\""));
    assert!(res.body.contains("We are closed on Sundays"));
    assert!(!res.body.contains("You're booked in"));
}

#[tokio::test]
async fn test_form_posts_are_rate_limited() {
    let app = TestApp::with_client_ip("198.51.100.7");
    let fields = [("name", ""), ("email", ""), ("message", "")];

    for _ in 0..5 {
        let res = app.post_form("/contact", &fields).await;
        assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    let limited = app.post_form("/contact", &fields).await;
    assert_eq!(limited.status, StatusCode::TOO_MANY_REQUESTS);
    assert!(limited.body.contains("Too many requests"));
    assert!(limited.body.contains("Try again"));

    // Reading the form is never limited
    assert_eq!(app.get("/contact").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_non_form_body_is_bad_request() {
    use axum::body::Body;
    use axum::http::{Request, header};

    let app = TestApp::new();
    let request = Request::post("/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", "192.0.2.44")
        .body(Body::from("{\"name\":\"Dana\"}"))
        .unwrap();
    let res = app.send(request).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.contains("Bad request"));
    assert!(!res.body.contains("Try again"));
}
