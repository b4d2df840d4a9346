//! Page rendering through the full router.

use axum::http::StatusCode;
use gearbox_core::catalog::{self, CategoryFilter};
use gearbox_core::{ServiceCategory, catalog::filter_services};
use gearbox_integration_tests::{BASE_URL, TestApp, html_escaped};

#[tokio::test]
async fn test_home_renders_hero_services_and_reviews() {
    let app = TestApp::new();
    let res = app.get("/").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.header("content-type").starts_with("text/html"));
    assert!(res.body.contains("data-carousel"));
    assert!(res.body.contains(catalog::hero_slides()[0].title));
    for service in catalog::popular_services() {
        assert!(
            res.body.contains(&format!("href=\"/services/{}\"", service.id)),
            "missing popular service {}",
            service.id
        );
    }
    assert!(res.body.contains("id=\"testimonials\""));
}

#[tokio::test]
async fn test_home_slide_query_is_clamped() {
    let app = TestApp::new();

    let res = app.get("/?slide=999").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.count("class=\"slide is-active\"") >= 1);

    let res = app.get("/?slide=abc&review=-3").await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn test_services_category_shows_only_that_category() {
    let app = TestApp::new();
    let res = app.get("/services?category=engine").await;

    assert_eq!(res.status, StatusCode::OK);

    let engine = filter_services(CategoryFilter::Only(ServiceCategory::Engine));
    assert!(!engine.is_empty());
    for service in catalog::services() {
        let link = format!("href=\"/services/{}\"", service.id);
        if service.category == ServiceCategory::Engine {
            assert!(res.body.contains(&link), "missing {}", service.id);
        } else {
            assert!(!res.body.contains(&link), "unexpected {}", service.id);
        }
    }
    assert!(res.body.contains("aria-current=\"page\">Engine"));
}

#[tokio::test]
async fn test_unknown_category_shows_everything() {
    let app = TestApp::new();
    let res = app.get("/services?category=spaceships").await;

    assert_eq!(res.status, StatusCode::OK);
    for service in catalog::services() {
        assert!(res.body.contains(&format!("href=\"/services/{}\"", service.id)));
    }
}

#[tokio::test]
async fn test_service_detail() {
    let app = TestApp::new();
    let service = &catalog::services()[0];
    let res = app.get(&format!("/services/{}", service.id)).await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(service.title.contains('&'));
    assert!(res.body.contains(&html_escaped(service.title)));
    assert!(res.body.contains(&format!("/appointment?service={}", service.id)));
    assert!(res.body.contains(&format!(
        "<link rel=\"canonical\" href=\"{BASE_URL}/services/{}\">",
        service.id
    )));
}

#[tokio::test]
async fn test_images_fall_back_when_primary_missing() {
    let app = TestApp::new();
    let res = app.get("/services").await;

    // Catalog photos are not checked in, so cards use the bundled fallback.
    assert!(res.body.contains("src=\"/static/images/fallback/service.svg\""));
    assert!(!res.body.contains("Image unavailable"));
}

#[tokio::test]
async fn test_unknown_service_is_404_page() {
    let app = TestApp::new();
    let res = app.get("/services/flux-capacitor").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.header("content-type").starts_with("text/html"));
    assert!(res.body.contains("Page not found"));
    assert!(res.body.contains("Back to home"));
    assert!(!res.body.contains("Try again"));
}

#[tokio::test]
async fn test_unknown_route_is_404_page() {
    let app = TestApp::new();
    let res = app.get("/definitely/not/a/page").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains("Page not found"));
    assert!(res.body.contains(&format!("Reference: <code>{}</code>", res.header("x-request-id"))));
}

#[tokio::test]
async fn test_about_and_content_pages() {
    let app = TestApp::new();

    let res = app.get("/about").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("two-bay garage"));

    let res = app.get("/terms").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("<h2>Estimates</h2>"));
    assert!(res.body.contains("Last updated January 15, 2025"));

    let res = app.get("/privacy").await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn test_sitemap_and_robots() {
    let app = TestApp::new();

    let res = app.get("/sitemap.xml").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.header("content-type").starts_with("application/xml"));
    assert!(res.body.contains(&format!("<loc>{BASE_URL}/services</loc>")));
    assert!(res.body.contains(&format!("<loc>{BASE_URL}/privacy</loc>")));
    assert_eq!(
        res.count(&format!("<loc>{BASE_URL}/services/")),
        catalog::services().len()
    );

    let res = app.get("/robots.txt").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains(&format!("Sitemap: {BASE_URL}/sitemap.xml")));
}

#[tokio::test]
async fn test_static_and_manifest() {
    let app = TestApp::new();

    let res = app.get("/static/css/main.css").await;
    assert_eq!(res.status, StatusCode::OK);

    let res = app.get("/site.webmanifest").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.header("content-type"), "application/manifest+json");
    assert!(res.body.contains(catalog::site_profile().name));
}
