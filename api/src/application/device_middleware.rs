use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

pub const DEVICE_ID_HEADER: &str = "x-device-id";
pub const DEFAULT_DEVICE_ID: &str = "default_device";

/// Device context stored in request extensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceContext {
    pub device_id: String,
}

/// Reads the `x-device-id` header into a [`DeviceContext`]. A missing, blank
/// or non-ASCII header falls back to [`DEFAULT_DEVICE_ID`].
pub async fn device_middleware(mut req: Request, next: Next) -> Response {
    let device_id = req
        .headers()
        .get(DEVICE_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| {
            debug!("no device id on request, using default device");
            DEFAULT_DEVICE_ID.to_string()
        });

    req.extensions_mut().insert(DeviceContext { device_id });

    next.run(req).await
}
