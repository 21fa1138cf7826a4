//! A URL router that indexes regex routes by their static path prefix.
//!
//! ```
//! use prefix_router::Router;
//!
//! let mut router: Router<u32> = Router::new();
//! router.insert(r"/user/:id(\d+)", 1).insert("/user/:id/edit", 2);
//!
//! let (data, params) = router.find("/user/123").unwrap();
//! assert_eq!(*data, 1);
//! assert_eq!(params.get("id"), Some("123"));
//! ```

#![forbid(unsafe_code)]

mod config;
mod query;
mod router;

pub use crate::config::{MismatchPolicy, RouterConfig};
pub use crate::query::QueryParams;
pub use crate::router::{Captures, CompiledPattern, Route, Router, RouterError};

#[cfg(feature = "http-router")]
mod http_router;

#[cfg(feature = "http-router")]
mod mux;

#[cfg(feature = "http-router")]
pub use crate::http_router::{normalize_method, HttpRouter, Method};

#[cfg(feature = "http-router")]
pub use crate::mux::{BoxHandler, Exchange, Handler, Mux};

#[cfg(feature = "hyper-service")]
mod hyper_service;

#[cfg(feature = "hyper-service")]
pub use crate::hyper_service::{HyperExchange, RouterService};
