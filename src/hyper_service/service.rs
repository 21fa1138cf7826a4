use super::exchange::HyperExchange;
use super::{Request, Response};
use crate::mux::Mux;

use std::convert::Infallible;
use std::future::{ready, Ready};
use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;

/// hyper service over a finished [`Mux`]. Clones share the same routes.
#[derive(Debug, Clone)]
pub struct RouterService {
    mux: Arc<Mux<HyperExchange>>,
}

impl Service<Request> for RouterService {
    type Response = Response;
    type Error = Infallible;
    type Future = Ready<Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let mut ex = HyperExchange::new(req);
        self.mux.handle(&mut ex);
        ready(Ok(ex.into_response()))
    }
}

impl RouterService {
    pub fn new(mux: Mux<HyperExchange>) -> Self {
        Self { mux: Arc::new(mux) }
    }

    pub fn mux(&self) -> &Mux<HyperExchange> {
        &self.mux
    }
}

impl Mux<HyperExchange> {
    pub fn into_service(self) -> RouterService {
        RouterService::new(self)
    }
}
