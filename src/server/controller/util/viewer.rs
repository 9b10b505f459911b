//! Viewer identity extraction.
//!
//! Authentication terminates upstream of this service; the proxy forwards the
//! authenticated user's ID in a request header. Handlers that scope their output
//! resolve that ID against the user table.

use axum::http::HeaderMap;

use crate::server::error::scope::ScopeError;

pub static VIEWER_HEADER: &str = "x-keshav-user";

/// Reads the viewer's user ID from the request headers.
pub fn viewer_id(headers: &HeaderMap) -> Result<i32, ScopeError> {
    let value = headers
        .get(VIEWER_HEADER)
        .ok_or(ScopeError::MissingViewerHeader)?;

    value
        .to_str()
        .map_err(|_| ScopeError::InvalidViewerHeader)?
        .parse()
        .map_err(|_| ScopeError::InvalidViewerHeader)
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue};

    use super::*;
    use crate::server::error::scope::ScopeError;

    #[test]
    fn parses_viewer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(VIEWER_HEADER, HeaderValue::from_static("42"));

        assert_eq!(viewer_id(&headers).unwrap(), 42);
    }

    #[test]
    fn missing_header_is_rejected() {
        let headers = HeaderMap::new();

        assert!(matches!(
            viewer_id(&headers),
            Err(ScopeError::MissingViewerHeader)
        ));
    }

    #[test]
    fn malformed_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(VIEWER_HEADER, HeaderValue::from_static("not-a-number"));

        assert!(matches!(
            viewer_id(&headers),
            Err(ScopeError::InvalidViewerHeader)
        ));
    }
}
