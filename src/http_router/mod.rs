#![forbid(unsafe_code)]

mod method;
mod router_macro;

pub use self::method::normalize_method;

use crate::config::RouterConfig;
use crate::query::QueryParams;
use crate::router::{Captures, Router, RouterError};

use std::collections::HashMap;

pub use http::Method;

/// Method-keyed set of route tables.
#[derive(Debug, Default)]
pub struct HttpRouter<T> {
    config: RouterConfig,
    method_map: HashMap<Method, Router<T>>,
}

impl<T> HttpRouter<T> {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            config,
            method_map: HashMap::new(),
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn lookup(&self, method: &Method) -> Option<&Router<T>> {
        self.method_map.get(method)
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> + '_ {
        self.method_map.keys()
    }

    pub fn find<'s, 'p, 't>(
        &'s self,
        method: &Method,
        path: &'p str,
    ) -> Option<(&'t T, Captures<'p>)>
    where
        's: 'p + 't,
    {
        self.method_map.get(method)?.find(path)
    }

    /// Finds the route for `method` and `path`, appending its parameters to `query`.
    ///
    /// `query` is left untouched when nothing matches.
    pub fn resolve(&self, method: &str, path: &str, query: &mut QueryParams) -> Option<&T> {
        let method = normalize_method(method).ok()?;
        let (data, captures) = self.find(&method, path)?;
        query.extend(captures.iter().map(|&(k, v)| (k, v)));
        Some(data)
    }

    pub fn insert(&mut self, method: Method, pattern: &str, data: T) -> &mut Self {
        self.access_router(method).insert(pattern, data);
        self
    }

    pub fn try_insert(
        &mut self,
        method: Method,
        pattern: &str,
        data: T,
    ) -> Result<&mut Self, RouterError> {
        self.access_router(method).try_insert(pattern, data)?;
        Ok(self)
    }

    /// Registers under a method given as text. Standard methods are matched
    /// case-insensitively, anything else is kept verbatim.
    pub fn try_route(
        &mut self,
        method: &str,
        pattern: &str,
        data: T,
    ) -> Result<&mut Self, RouterError> {
        let method = normalize_method(method)?;
        tracing::debug!(%method, pattern, "registering route");
        self.try_insert(method, pattern, data)
    }
}

impl<T> HttpRouter<T> {
    fn access_router(&mut self, method: Method) -> &mut Router<T> {
        let config = &self.config;
        self.method_map
            .entry(method)
            .or_insert_with(|| Router::with_config(config.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_are_separate() {
        let mut router: HttpRouter<usize> = HttpRouter::new();
        router
            .insert(Method::GET, "/user/", 1)
            .insert(Method::POST, "/user/", 2);

        assert_eq!(*router.find(&Method::GET, "/user").unwrap().0, 1);
        assert_eq!(*router.find(&Method::POST, "/user").unwrap().0, 2);
        assert!(router.find(&Method::DELETE, "/user").is_none());
        assert!(router.lookup(&Method::DELETE).is_none());
        assert!(router.lookup(&Method::GET).unwrap().routes("/user").is_some());
    }

    #[test]
    fn resolve_appends_params() {
        let mut router: HttpRouter<usize> = HttpRouter::new();
        router.try_route("put", r"/user/:id(\d+)", 4).unwrap();

        let mut query = QueryParams::parse("id=0&x=1");
        assert_eq!(router.resolve("PUT", "/user/789", &mut query), Some(&4));
        assert_eq!(query.get_all("id").collect::<Vec<_>>(), ["0", "789"]);
        assert_eq!(query.get("x"), Some("1"));

        let mut query = QueryParams::new();
        assert_eq!(router.resolve("PUT", "/user/abc", &mut query), None);
        assert!(query.is_empty());
    }

    #[test]
    fn extension_methods() {
        let mut router: HttpRouter<usize> = HttpRouter::new();
        router.try_route("PURGE", "/cache/:key", 1).unwrap();

        let mut query = QueryParams::new();
        assert_eq!(router.resolve("PURGE", "/cache/a", &mut query), Some(&1));
        assert_eq!(router.resolve("purge", "/cache/a", &mut query), None);
        assert!(router.try_route("BAD METHOD", "/x", 2).is_err());
    }
}
