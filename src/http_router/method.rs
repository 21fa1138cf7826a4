use crate::router::RouterError;

use http::Method;

const STANDARD: [Method; 9] = [
    Method::CONNECT,
    Method::DELETE,
    Method::GET,
    Method::HEAD,
    Method::OPTIONS,
    Method::PATCH,
    Method::POST,
    Method::PUT,
    Method::TRACE,
];

/// Maps `get`, `Get`, ... onto the standard methods and keeps any other
/// valid token as an extension method.
pub fn normalize_method(method: &str) -> Result<Method, RouterError> {
    if let Some(m) = STANDARD
        .iter()
        .find(|m| m.as_str().eq_ignore_ascii_case(method))
    {
        return Ok(m.clone());
    }
    Method::from_bytes(method.as_bytes())
        .map_err(|_| RouterError::InvalidMethod(method.to_owned()))
}
