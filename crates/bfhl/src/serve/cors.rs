use crate::prelude::*;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

/// Build the CORS layer for the configured origins.
///
/// A `*` entry allows any origin without credentials. Explicit origins allow
/// credentials and mirror the requested method and headers back.
pub fn cors_layer(origins: &str) -> Result<CorsLayer> {
    let origins = parse_origins(origins);

    if origins.iter().any(|origin| origin == "*") {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let values = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| Error::InvalidOrigin(origin.clone()).into())
        })
        .collect::<Result<Vec<HeaderValue>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(values))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
