use super::{Request, Response};
use crate::mux::Exchange;
use crate::query::QueryParams;

use std::borrow::Cow;

use http::uri::{PathAndQuery, Uri};
use hyper::{Body, StatusCode};

/// A hyper request together with the response its handlers fill in.
#[derive(Debug)]
pub struct HyperExchange {
    request: Request,
    path: String,
    query: QueryParams,
    response: Response,
}

impl HyperExchange {
    /// The path is percent-decoded once here; a path that does not decode
    /// to UTF-8 is matched as written.
    pub fn new(request: Request) -> Self {
        let raw_path = request.uri().path();
        let path = urlencoding::decode(raw_path)
            .map(Cow::into_owned)
            .unwrap_or_else(|_| raw_path.to_owned());
        let query = request
            .uri()
            .query()
            .map(QueryParams::parse)
            .unwrap_or_default();
        Self {
            request,
            path,
            query,
            response: Response::new(Body::empty()),
        }
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    /// Query parameters of the request, followed by the route parameters once matched.
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn response_mut(&mut self) -> &mut Response {
        &mut self.response
    }

    pub fn into_response(self) -> Response {
        self.response
    }

    fn rewrite_uri(&mut self, start: usize) -> Result<(), http::Error> {
        let params: QueryParams = self.query.iter().skip(start).collect();
        if params.is_empty() {
            return Ok(());
        }

        let uri = self.request.uri();
        let query = match uri.query() {
            Some(raw) if !raw.is_empty() => format!("{}&{}", raw, params),
            _ => params.encode(),
        };
        let pq: PathAndQuery = format!("{}?{}", uri.path(), query).parse()?;

        let mut parts = uri.clone().into_parts();
        parts.path_and_query = Some(pq);
        *self.request.uri_mut() = Uri::from_parts(parts)?;
        Ok(())
    }
}

impl Exchange for HyperExchange {
    fn method(&self) -> &str {
        self.request.method().as_str()
    }

    /// Decoded request path.
    fn path(&self) -> &str {
        &self.path
    }

    fn query_mut(&mut self) -> &mut QueryParams {
        &mut self.query
    }

    fn not_found(&mut self) {
        *self.response.status_mut() = StatusCode::NOT_FOUND;
        *self.response.body_mut() = Body::from("404 Not Found");
    }

    fn params_bound(&mut self, start: usize) {
        if let Err(e) = self.rewrite_uri(start) {
            tracing::warn!(error = %e, "failed to rewrite request query");
        }
    }
}
