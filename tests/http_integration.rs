use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use noerr_site::AppState;
use noerr_site::config::{
    AppConfig, FormsConfig, LimitsConfig, LogConfig, ServerConfig, SiteConfig,
};
use noerr_site::contact::{ContactError, FormSink, HttpFormSink};
use noerr_site::server::build_router;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records forwarded bodies; optionally fails every forward.
#[derive(Default)]
struct RecordingSink {
    bodies: Mutex<Vec<String>>,
    fail: bool,
}

#[async_trait]
impl FormSink for RecordingSink {
    async fn forward(&self, body: String) -> Result<(), ContactError> {
        self.bodies.lock().unwrap().push(body);
        if self.fail {
            Err(ContactError::Rejected(reqwest::StatusCode::BAD_GATEWAY))
        } else {
            Ok(())
        }
    }

    fn describe(&self) -> String {
        "recording".into()
    }
}

fn test_config(static_dir: &Path) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".into(),
            timeout_disabled: false,
        },
        site: SiteConfig {
            static_dir: static_dir.to_path_buf(),
            phone: "+1 (717) 242-0566".into(),
            email: "info@noerr.com".into(),
        },
        forms: FormsConfig {
            endpoint: String::new(),
            form_name: "contact".into(),
            timeout_secs: 2,
        },
        limits: LimitsConfig {
            contact_per_second: 100.0,
            contact_burst: 100.0,
        },
        log: LogConfig { json: false },
    }
}

fn static_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("icons")).unwrap();
    fs::write(dir.path().join("icons/warehousing.svg"), "<svg/>").unwrap();
    dir
}

fn server_with(config: AppConfig, sink: Arc<dyn FormSink>) -> TestServer {
    let state = AppState::new(Arc::new(config), sink);
    TestServer::new(build_router(state)).unwrap()
}

fn hx() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("hx-request"),
        HeaderValue::from_static("true"),
    )
}

fn valid_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("form-name", "contact"),
        ("inquiryType", "transportation"),
        ("name", "Dana Reyes"),
        ("company", "Acme Goods"),
        ("email", "dana@acme.test"),
        ("phone", ""),
        ("message", "Weekly FTL lanes to Ohio"),
        ("bot-field", ""),
    ]
}

#[tokio::test]
async fn test_landing_page_links() {
    let dir = static_dir();
    let server = server_with(test_config(dir.path()), Arc::new(RecordingSink::default()));

    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();

    for anchor in ["#about", "#services", "#technology", "#contact"] {
        assert!(html.contains(&format!(r#"href="{anchor}""#)), "missing {anchor}");
    }
    assert!(html.contains(r#"href="tel:+17172420566""#));
    assert!(html.contains("mailto:info@noerr.com?subject=Logistics%20Inquiry"));
    assert!(html.contains(r#"id="contact-wizard" data-step="1""#));
}

#[tokio::test]
async fn test_missing_icons_render_glyphs() {
    let dir = static_dir();
    let server = server_with(test_config(dir.path()), Arc::new(RecordingSink::default()));

    let html = server.get("/").await.text();

    // present on disk
    assert!(html.contains(r#"src="/static/icons/warehousing.svg""#));
    // absent: glyph instead of a broken image
    assert!(!html.contains(r#"src="/static/icons/control-tower.svg""#));
    assert!(html.contains(r#"class="icon-fallback text-2xl" role="img" aria-label="Control Center""#));
}

#[tokio::test]
async fn test_static_files_are_served() {
    let dir = static_dir();
    let server = server_with(test_config(dir.path()), Arc::new(RecordingSink::default()));

    let response = server.get("/static/icons/warehousing.svg").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "<svg/>");
}

#[tokio::test]
async fn test_healthz() {
    let dir = static_dir();
    let server = server_with(test_config(dir.path()), Arc::new(RecordingSink::default()));

    let response = server.get("/healthz").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn test_select_moves_to_details() {
    let dir = static_dir();
    let server = server_with(test_config(dir.path()), Arc::new(RecordingSink::default()));
    let (name, value) = hx();

    let response = server
        .post("/contact/select")
        .add_header(name, value)
        .form(&[("inquiryType", "b2b")])
        .await;
    response.assert_status_ok();
    let html = response.text();

    // fragment only
    assert!(html.starts_with(r#"<div id="contact-wizard" data-step="2">"#));
    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.contains(r#"<input type="hidden" name="inquiryType" value="b2b">"#));
}

#[tokio::test]
async fn test_select_without_htmx_returns_page() {
    let dir = static_dir();
    let server = server_with(test_config(dir.path()), Arc::new(RecordingSink::default()));

    let html = server
        .post("/contact/select")
        .form(&[("inquiryType", "vas")])
        .await
        .text();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-step="2""#));
}

#[tokio::test]
async fn test_unknown_inquiry_is_rejected() {
    let dir = static_dir();
    let server = server_with(test_config(dir.path()), Arc::new(RecordingSink::default()));
    let (name, value) = hx();

    let response = server
        .post("/contact/select")
        .add_header(name, value)
        .form(&[("inquiryType", "freight-forwarding")])
        .expect_failure()
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains(r#"data-step="1""#));
}

#[tokio::test]
async fn test_back_and_reset() {
    let dir = static_dir();
    let server = server_with(test_config(dir.path()), Arc::new(RecordingSink::default()));

    let (name, value) = hx();
    let back = server
        .get("/contact/back")
        .add_query_param("inquiryType", "wms")
        .add_header(name, value)
        .await
        .text();
    assert!(back.contains(r#"data-step="1""#));
    assert!(back.contains(r#"value="wms" aria-pressed="true""#));

    let (name, value) = hx();
    let reset = server
        .get("/contact/step/select")
        .add_header(name, value)
        .await
        .text();
    assert!(reset.contains(r#"data-step="1""#));
    assert!(!reset.contains(r#"aria-pressed="true""#));
}

#[tokio::test]
async fn test_back_then_reselect_keeps_typed_details() {
    let dir = static_dir();
    let server = server_with(test_config(dir.path()), Arc::new(RecordingSink::default()));

    // Back from step 2 submits the details form as a query.
    let (name, value) = hx();
    let back = server
        .get("/contact/back")
        .add_query_params([
            ("form-name", "contact"),
            ("inquiryType", "wms"),
            ("name", "Dana Reyes"),
            ("company", "Acme & Sons"),
            ("email", ""),
            ("message", "Cold storage"),
        ])
        .add_header(name, value)
        .await
        .text();
    assert!(back.contains(r#"data-step="1""#));
    assert!(back.contains(r#"<input type="hidden" name="company" value="Acme &amp; Sons">"#));

    // Choosing another category posts the hidden copies along with it.
    let (name, value) = hx();
    let details = server
        .post("/contact/select")
        .add_header(name, value)
        .form(&[
            ("name", "Dana Reyes"),
            ("company", "Acme & Sons"),
            ("message", "Cold storage"),
            ("inquiryType", "vas"),
        ])
        .await
        .text();
    assert!(details.contains(r#"data-step="2""#));
    assert!(details.contains(r#"<input type="hidden" name="inquiryType" value="vas">"#));
    assert!(details.contains(r#"value="Dana Reyes""#));
    assert!(details.contains(r#"value="Acme &amp; Sons""#));
    assert!(details.contains("Cold storage</textarea>"));
}

#[tokio::test]
async fn test_valid_submission_is_forwarded() {
    let dir = static_dir();
    let sink = Arc::new(RecordingSink::default());
    let server = server_with(test_config(dir.path()), sink.clone());
    let (name, value) = hx();

    let response = server
        .post("/contact")
        .add_header(name, value)
        .form(&valid_form())
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("Thank You!"));

    let bodies = sink.bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0].starts_with("form-name=contact&inquiryType=transportation&name=Dana+Reyes"));
    assert!(!bodies[0].contains("bot-field"));
}

#[tokio::test]
async fn test_thank_you_even_when_endpoint_fails() {
    let dir = static_dir();
    let sink = Arc::new(RecordingSink {
        fail: true,
        ..RecordingSink::default()
    });
    let server = server_with(test_config(dir.path()), sink.clone());
    let (name, value) = hx();

    let response = server
        .post("/contact")
        .add_header(name, value)
        .form(&valid_form())
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("Thank You!"));
    assert_eq!(sink.bodies.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_thank_you_when_endpoint_unreachable() {
    let dir = static_dir();
    let sink = HttpFormSink::new(
        "http://127.0.0.1:1/forms".parse().unwrap(),
        Duration::from_secs(2),
    )
    .unwrap();
    let server = server_with(test_config(dir.path()), Arc::new(sink));
    let (name, value) = hx();

    let response = server
        .post("/contact")
        .add_header(name, value)
        .form(&valid_form())
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("Thank You!"));
}

#[tokio::test]
async fn test_invalid_submission_lists_problems() {
    let dir = static_dir();
    let sink = Arc::new(RecordingSink::default());
    let server = server_with(test_config(dir.path()), sink.clone());
    let (name, value) = hx();

    let response = server
        .post("/contact")
        .add_header(name, value)
        .form(&[
            ("inquiryType", "ecommerce"),
            ("name", "Dana"),
            ("company", ""),
            ("email", "not-an-email"),
            ("message", "Hello"),
        ])
        .expect_failure()
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let html = response.text();
    assert!(html.contains(r#"data-step="2""#));
    assert!(html.contains("Please provide a valid company."));
    assert!(html.contains("Please provide a valid email."));
    // what the visitor typed survives
    assert!(html.contains(r#"value="Dana""#));
    assert!(sink.bodies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_honeypot_is_dropped_silently() {
    let dir = static_dir();
    let sink = Arc::new(RecordingSink::default());
    let server = server_with(test_config(dir.path()), sink.clone());
    let (name, value) = hx();

    let mut form = valid_form();
    form.retain(|(key, _)| *key != "bot-field");
    form.push(("bot-field", "http://spam.example"));

    let response = server
        .post("/contact")
        .add_header(name, value)
        .form(&form)
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("Thank You!"));
    assert!(sink.bodies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_contact_is_rate_limited() {
    let dir = static_dir();
    let mut config = test_config(dir.path());
    config.limits = LimitsConfig {
        contact_per_second: 0.001,
        contact_burst: 1.0,
    };
    let server = server_with(config, Arc::new(RecordingSink::default()));

    server
        .post("/contact")
        .form(&valid_form())
        .await
        .assert_status_ok();

    let (name, value) = hx();
    let limited = server
        .post("/contact")
        .add_header(name, value)
        .form(&valid_form())
        .expect_failure()
        .await;
    limited.assert_status(StatusCode::TOO_MANY_REQUESTS);
    // The notice lands in the details step, leaving the form intact.
    assert_eq!(limited.header("hx-retarget"), "#contact-notice");
    assert_eq!(limited.header("hx-reswap"), "innerHTML");
    assert!(limited.headers().get("retry-after").is_some());
    assert!(limited.text().contains(r#"role="alert""#));

    let details = server
        .post("/contact/select")
        .form(&[("inquiryType", "b2b")])
        .await
        .text();
    assert!(details.contains(r#"<div id="contact-notice""#));

    // other routes are not limited
    server.get("/").await.assert_status_ok();
}
