mod cli;
mod cors;

pub use cli::App;

use crate::prelude::{eprintln, *};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use bfhl_core::classify::classify;
use bfhl_core::response::{BfhlRequest, BfhlResponse, Identity, StatusOutput};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let addr = f!("{}:{}", app.host, app.port);

    let cors = cors::cors_layer(&app.cors_origins)?;
    let identity: Identity = app.identity.into();
    let app_router = router(identity, cors);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Bind(f!("{addr}: {e}")))?;

    log::info!("Listening on http://{addr}");
    log::info!("Allowed CORS origins: {}", app.cors_origins);

    if global.verbose {
        eprintln!("BFHL API listening on http://{}", addr);
        eprintln!("Status endpoint: http://{}/api/", addr);
        eprintln!("Process endpoint: http://{}/api/bfhl", addr);
    }

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Build the application router
pub fn router(identity: Identity, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api", get(status_handler))
        .route("/api/", get(status_handler))
        .route("/api/bfhl", post(bfhl_handler))
        .layer(cors)
        .with_state(Arc::new(identity))
}

async fn status_handler() -> Json<StatusOutput> {
    Json(StatusOutput::running())
}

async fn bfhl_handler(
    State(identity): State<Arc<Identity>>,
    Json(request): Json<BfhlRequest>,
) -> Json<BfhlResponse> {
    log::debug!("Classifying {} tokens", request.data.len());

    let outcome = classify(&request.data);
    if let Err(err) = &outcome {
        log::error!("Error processing BFHL data: {err}");
    }

    Json(BfhlResponse::from_outcome(&identity, outcome))
}
