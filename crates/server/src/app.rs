use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Router,
};
use std::any::Any as PanicPayload;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;

use crate::clients::openai::ChatClient;
use crate::config::Config;
use crate::error::AppError;
use crate::routes;

/// Build the full application router, including the upstream client it shares between requests.
pub fn router(config: &Config) -> Result<Router, AppError> {
    let client = ChatClient::new(config)?;

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/help", get(routes::help::help))
        .route("/ai-move", post(routes::ai_move::ai_move))
        // Static entry page
        .route_service("/", ServeFile::new(&config.index_path))
        .layer(Extension(client));

    Ok(with_outer_layers(app))
}

/// Panic catching and CORS, shared by every route.
fn with_outer_layers(app: Router) -> Router {
    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
}

/// Turn a handler panic into a 500 carrying the panic message.
fn panic_response(err: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let msg = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "handler panicked".to_string());

    AppError::Internal(msg).into_response()
}
