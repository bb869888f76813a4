use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::REQUEST_ID_HEADER;

/// Build the CORS layer.
///
/// `None` allows any origin, which is what the browser client expects in a
/// local setup. A list restricts responses to those origins; entries that are
/// not valid header values are skipped with a warning.
pub fn create_cors_layer(allowed_origins: Option<Vec<String>>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]);

    match allowed_origins {
        None => layer.allow_origin(Any),
        Some(origins) => {
            let origins = origins
                .into_iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect::<Vec<_>>();

            layer.allow_origin(AllowOrigin::list(origins))
        }
    }
}
