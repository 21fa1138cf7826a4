#![forbid(unsafe_code)]

mod exchange;
mod service;

pub use self::exchange::HyperExchange;
pub use self::service::RouterService;

type Request = hyper::Request<hyper::Body>;
type Response = hyper::Response<hyper::Body>;
