//! CORS middleware built from the configured origin list.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Creates the CORS layer.
///
/// A `*` entry allows any origin without credentials. Otherwise only the
/// listed origins are allowed, and credentials are permitted.
///
/// # Errors
///
/// Returns an error if an origin is not a valid header value.
pub fn layer(origins: &[String]) -> Result<CorsLayer> {
    let cors = CorsLayer::new().allow_methods(ALLOWED_METHODS);

    if origins.iter().any(|o| o == "*") {
        return Ok(cors.allow_origin(Any).allow_headers(Any));
    }

    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{}'", o))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(cors
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true))
}
