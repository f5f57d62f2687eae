//! HTTP endpoint exposing the extraction pipeline.
//!
//! `GET /api/quiz` fetches the configured source page, runs one pipeline
//! instance, and returns `{ ok, title, questions, source }`. `OPTIONS`
//! answers preflight with no body. CORS headers allow any origin.
//!
//! Configuration comes from the environment:
//! - `QUIZWIRE_ADDR` — bind address (default `0.0.0.0:3000`)
//! - `QUIZWIRE_SOURCE_URL` — upstream article URL

use std::env;
use std::panic::{catch_unwind, AssertUnwindSafe};

use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quizwire::{extract_with_options, fetch_document, Error, Options};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SOURCE_URL: &str = "https://wikitechlibrary.com/today-telenor-quiz-answers/";

#[derive(Clone)]
struct AppState {
    source_url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let source_url = env::var("QUIZWIRE_SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.into());
    let addr = env::var("QUIZWIRE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let app = Router::new()
        .route("/api/quiz", get(quiz).options(preflight))
        .with_state(AppState { source_url });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "quizwire listening");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn quiz(State(state): State<AppState>) -> Response {
    let html = match fetch_document(&state.source_url).await {
        Ok(html) => html,
        Err(err) => return fetch_error_response(&err),
    };

    let options = Options {
        url: Some(state.source_url.clone()),
        ..Options::default()
    };

    // The pipeline is pure and not expected to panic; if it ever does, the
    // caller gets the generic failure body, never a stack trace.
    match catch_unwind(AssertUnwindSafe(|| extract_with_options(&html, &options))) {
        Ok(result) => with_cors(
            StatusCode::OK,
            Json(json!({
                "ok": true,
                "title": result.title,
                "questions": result.questions,
                "source": state.source_url,
            })),
        ),
        Err(_) => {
            tracing::error!("extraction pipeline panicked");
            pipeline_error_response()
        }
    }
}

async fn preflight() -> Response {
    with_cors(StatusCode::NO_CONTENT, ())
}

fn fetch_error_response(err: &Error) -> Response {
    tracing::warn!(error = %err, "upstream fetch failed");
    with_cors(
        StatusCode::BAD_GATEWAY,
        Json(json!({ "ok": false, "error": "Upstream fetch failed" })),
    )
}

fn pipeline_error_response() -> Response {
    with_cors(
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "ok": false, "error": "Failed to fetch quiz" })),
    )
}

fn with_cors(status: StatusCode, body: impl IntoResponse) -> Response {
    let mut response = (status, body).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
