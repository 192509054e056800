//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;

use crate::core::errors::TranslateError;
use crate::core::models::{ErrorResponse, TranslationRequest, TranslationResponse, WelcomeMessage};
use crate::core::service::TranslationService;
use crate::server::extract::JsonBody;

/// Fixed payload served from `/`
pub const WELCOME_MESSAGE: &str =
    "Vibe Coding 번역기에 오신 것을 환영합니다! /docs 로 이동하여 API 문서를 확인하세요.";

/// Application state
#[derive(Clone)]
pub struct AppState {
    service: TranslationService,
}

impl AppState {
    /// Wrap a translation service for the router
    pub fn new(service: TranslationService) -> Self {
        Self { service }
    }
}

/// OpenAPI document served from `/docs`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vibe Coding 기술 언어 번역기",
        description = "기술 용어를 누구나 이해하기 쉬운 비유와 은유로 번역해줍니다."
    ),
    paths(read_root, translate_term),
    components(schemas(TranslationRequest, TranslationResponse, WelcomeMessage, ErrorResponse))
)]
pub struct ApiDoc;

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let status = match self {
            TranslateError::Validation => StatusCode::BAD_REQUEST,
            TranslateError::Failure => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Welcome handler
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message", body = WelcomeMessage))
)]
async fn read_root() -> Json<WelcomeMessage> {
    Json(WelcomeMessage {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Term translation handler
#[utoipa::path(
    post,
    path = "/translate",
    request_body = TranslationRequest,
    responses(
        (status = 200, description = "Translated term", body = TranslationResponse),
        (status = 400, description = "Empty term", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
async fn translate_term(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<TranslationRequest>,
) -> Result<Json<TranslationResponse>, TranslateError> {
    let response = state.service.translate(&payload.term).await?;
    Ok(Json(response))
}

/// OpenAPI JSON handler
async fn openapi_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the router with CORS and request tracing applied
pub fn build_router(state: AppState) -> Router {
    // Origin, method and headers are mirrored back, with credentials allowed
    let cors = CorsLayer::very_permissive();

    Router::new()
        .route("/", get(read_root))
        .route("/translate", post(translate_term))
        .route("/docs", get(openapi_doc))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server
pub async fn run_server(service: TranslationService, host: String, port: u16) -> anyhow::Result<()> {
    let app = build_router(AppState::new(service));

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
