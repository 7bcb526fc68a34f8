use axum::{
    Form, Router,
    extract::{DefaultBodyLimit, Query, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{info, warn};

use crate::AppState;
use crate::config::AppConfig;
use crate::contact::{
    ContactError, ContactFlow, ContactSubmission, FormSink, HttpFormSink, InquiryType,
    LogOnlySink, deliver,
};
use crate::rate_limit::rate_limit_middleware;
use crate::ui::page::render_page;
use crate::ui::sections::{WizardView, wizard};

/// Request bodies larger than this are rejected before reaching a handler.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Pick the sink for contact submissions from the forms configuration.
pub fn build_sink(config: &AppConfig) -> anyhow::Result<Arc<dyn FormSink>> {
    match config.forms.endpoint_url()? {
        Some(endpoint) => {
            info!(
                name: "contact.sink.configured",
                endpoint = %endpoint,
                timeout_secs = config.forms.timeout().as_secs(),
                "Contact submissions will be forwarded"
            );
            Ok(Arc::new(HttpFormSink::new(endpoint, config.forms.timeout())?))
        }
        None => {
            warn!(
                name: "contact.sink.log_only",
                "No forms endpoint configured; contact submissions are only logged"
            );
            Ok(Arc::new(LogOnlySink))
        }
    }
}

/// All routes and middleware, ready to serve.
pub fn build_router(state: AppState) -> Router {
    // A very long timeout stands in for "disabled" so the layer types stay the same.
    let timeout_duration = if state.config.server.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60)
    } else {
        REQUEST_TIMEOUT
    };

    let submit = post(submit_contact).route_layer(axum::middleware::from_fn_with_state(
        state.clone(),
        rate_limit_middleware,
    ));

    Router::new()
        .route("/", get(index_handler))
        .route("/healthz", get(healthz))
        .route("/contact", submit)
        .route("/contact/step/select", get(step_select))
        .route("/contact/select", post(select_inquiry))
        .route("/contact/back", get(back_to_select))
        .nest_service("/static", ServeDir::new(&state.config.site.static_dir))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(timeout_duration, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let sink = build_sink(&config)?;
    let state = AppState::new(Arc::clone(&config), sink);

    if state.assets.is_empty() {
        warn!(
            name: "assets.empty",
            static_dir = %config.site.static_dir.display(),
            "Static directory is empty or missing; icons render as glyphs"
        );
    }

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Handlers
// ─────────────────────────────────────────────────────────────────────────────

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .is_some_and(|v| v.as_bytes().eq_ignore_ascii_case(b"true"))
}

/// The wizard fragment for htmx, the whole page otherwise.
fn wizard_response(
    state: &AppState,
    headers: &HeaderMap,
    status: StatusCode,
    view: &WizardView,
) -> Response {
    let ctx = state.render_context();
    let html = if is_htmx(headers) {
        wizard(&ctx, view)
    } else {
        render_page(&ctx, view)
    };
    (status, Html(html)).into_response()
}

/// GET / - Landing page.
async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_page(&state.render_context(), &WizardView::default()))
}

/// GET /healthz
async fn healthz() -> &'static str {
    "ok"
}

/// GET /contact/step/select - Fresh step 1, nothing selected.
async fn step_select(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let mut flow = ContactFlow::new();
    flow.reset();
    wizard_response(&state, &headers, StatusCode::OK, &WizardView::new(flow))
}

/// POST /contact/select - Record the category and move to step 2.
///
/// Details typed before going back ride along as hidden fields and are refilled.
async fn select_inquiry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(draft): Form<ContactSubmission>,
) -> Response {
    let mut flow = ContactFlow::new();
    match draft.inquiry_type.parse::<InquiryType>() {
        Ok(inquiry) => {
            flow.select(inquiry);
            info!(
                name: "contact.step.details",
                inquiry = %inquiry,
                "Inquiry type selected"
            );
            let view = WizardView::new(flow).with_draft(draft);
            wizard_response(&state, &headers, StatusCode::OK, &view)
        }
        Err(e) => {
            warn!(name: "contact.select.rejected", error = %e, "Unknown inquiry type");
            let view = WizardView::new(flow).with_draft(draft);
            wizard_response(&state, &headers, StatusCode::UNPROCESSABLE_ENTITY, &view)
        }
    }
}

/// GET /contact/back - Step 1 with the previous choice still highlighted and
/// the typed details kept for the next choice.
async fn back_to_select(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(draft): Query<ContactSubmission>,
) -> Response {
    let mut flow = ContactFlow::new();
    if let Some(inquiry) = draft.inquiry() {
        flow.select(inquiry);
        flow.back();
    }
    let view = WizardView::new(flow).with_draft(draft);
    wizard_response(&state, &headers, StatusCode::OK, &view)
}

/// POST /contact - Validate, forward, thank.
async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(mut submission): Form<ContactSubmission>,
) -> Response {
    let mut flow = ContactFlow::new();

    let inquiry = match submission.validate() {
        Ok(inquiry) => inquiry,
        Err(e) => {
            let problems = match e {
                ContactError::Invalid(problems) => problems,
                other => vec![other.to_string()],
            };
            info!(
                name: "contact.invalid",
                problems = %problems.join(", "),
                "Contact submission rejected"
            );
            if let Some(inquiry) = submission.inquiry() {
                flow.select(inquiry);
            }
            let errors = problems
                .iter()
                .map(|p| format!("Please provide a valid {p}."))
                .collect();
            let view = WizardView::new(flow)
                .with_draft(submission)
                .with_errors(errors);
            return wizard_response(&state, &headers, StatusCode::UNPROCESSABLE_ENTITY, &view);
        }
    };

    if submission.form_name.trim().is_empty() {
        submission.form_name.clone_from(&state.config.forms.form_name);
    }

    flow.select(inquiry);
    deliver(state.sink.as_ref(), &mut flow, &submission).await;

    wizard_response(&state, &headers, StatusCode::OK, &WizardView::new(flow))
}
