use std::net::SocketAddr;

use axum::extract::{ConnectInfo, OriginalUri, Request};

/// Best-effort client address for logging and rate limiting.
///
/// Prefers the socket peer address, then the first `X-Forwarded-For` hop.
pub fn client_address(request: &Request) -> String {
    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Full request path, including any prefix stripped by nested routers.
pub fn original_path(request: &Request) -> String {
    request
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.path().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn prefers_connect_info() {
        let mut request = Request::builder()
            .header("x-forwarded-for", "203.0.113.9")
            .body(Body::empty())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([10, 0, 0, 1], 4000))));

        assert_eq!(client_address(&request), "10.0.0.1");
    }

    #[test]
    fn falls_back_to_forwarded_header() {
        let request = Request::builder()
            .header("x-forwarded-for", "203.0.113.9, 10.0.0.2")
            .body(Body::empty())
            .unwrap();

        assert_eq!(client_address(&request), "203.0.113.9");
    }

    #[test]
    fn unknown_without_any_source() {
        let request = Request::builder().body(Body::empty()).unwrap();

        assert_eq!(client_address(&request), "unknown");
    }
}
