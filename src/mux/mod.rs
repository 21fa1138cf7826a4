//! Dispatcher: route table plus the four lifecycle hooks.
//!
//! Routes and hooks are set up through `&mut Mux`; serving only needs
//! `&Mux`, so a mux shared between threads can no longer be changed.

mod exchange;
mod handler;
mod mux_macro;

pub use self::exchange::Exchange;
pub use self::handler::{BoxHandler, Handler};

use crate::config::RouterConfig;
use crate::http_router::HttpRouter;
use crate::query::QueryParams;
use crate::router::RouterError;

pub struct Mux<C> {
    router: HttpRouter<BoxHandler<C>>,
    hooks: Hooks<C>,
    not_found: Option<BoxHandler<C>>,
}

struct Hooks<C> {
    before_match: Option<BoxHandler<C>>,
    after_match: Option<BoxHandler<C>>,
    before_execute: Option<BoxHandler<C>>,
    after_execute: Option<BoxHandler<C>>,
}

impl<C> Default for Hooks<C> {
    fn default() -> Self {
        Self {
            before_match: None,
            after_match: None,
            before_execute: None,
            after_execute: None,
        }
    }
}

#[inline]
fn run_hook<C>(hook: &Option<BoxHandler<C>>, ex: &mut C) {
    if let Some(h) = hook {
        Handler::call(h, ex)
    }
}

impl<C> Default for Mux<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for Mux<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mux")
            .field("methods", &self.router.methods().collect::<Vec<_>>())
            .field("custom_not_found", &self.not_found.is_some())
            .finish()
    }
}

impl<C> Mux<C> {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            router: HttpRouter::with_config(config),
            hooks: Hooks::default(),
            not_found: None,
        }
    }

    pub fn router(&self) -> &HttpRouter<BoxHandler<C>> {
        &self.router
    }

    pub fn try_route(
        &mut self,
        method: &str,
        pattern: &str,
        h: impl Handler<C> + Send + Sync + 'static,
    ) -> Result<&mut Self, RouterError> {
        self.router.try_route(method, pattern, Box::new(h))?;
        Ok(self)
    }

    pub fn route(
        &mut self,
        method: &str,
        pattern: &str,
        h: impl Handler<C> + Send + Sync + 'static,
    ) -> &mut Self {
        if let Err(e) = self.router.try_route(method, pattern, Box::new(h)) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    /// Replaces the exchange's own "not found" response.
    pub fn not_found(&mut self, h: impl Handler<C> + Send + Sync + 'static) -> &mut Self {
        self.not_found = Some(Box::new(h));
        self
    }

    /// Bare matcher: finds the handler and appends the route parameters to `query`.
    pub fn resolve(
        &self,
        method: &str,
        path: &str,
        query: &mut QueryParams,
    ) -> Option<&BoxHandler<C>> {
        self.router.resolve(method, path, query)
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(
            &mut self,
            pattern: &str,
            h: impl Handler<C> + Send + Sync + 'static,
        ) -> &mut Self {
            self.route($method, pattern, h)
        }
    };
}

impl<C> Mux<C> {
    define_method!(get, "GET");
    define_method!(post, "POST");
    define_method!(put, "PUT");
    define_method!(delete, "DELETE");
    define_method!(head, "HEAD");
    define_method!(options, "OPTIONS");
    define_method!(connect, "CONNECT");
    define_method!(patch, "PATCH");
    define_method!(trace, "TRACE");
}

macro_rules! define_hook {
    ($name:tt) => {
        pub fn $name(&mut self, h: impl Handler<C> + Send + Sync + 'static) -> &mut Self {
            self.hooks.$name = Some(Box::new(h));
            self
        }
    };
}

impl<C> Mux<C> {
    define_hook!(before_match);
    define_hook!(after_match);
    define_hook!(before_execute);
    define_hook!(after_execute);
}

impl<C: Exchange> Mux<C> {
    /// Dispatches one exchange and reports whether a route handled it.
    ///
    /// On a miss only `before_match` has run before the not-found response.
    pub fn handle(&self, ex: &mut C) -> bool {
        run_hook(&self.hooks.before_match, ex);

        let method = ex.method().to_owned();
        let path = ex.path().to_owned();

        let start = ex.query_mut().len();

        let handler = match self.resolve(&method, &path, ex.query_mut()) {
            Some(h) => h,
            None => {
                tracing::debug!(%method, %path, "no route matched");
                match self.not_found {
                    Some(ref h) => Handler::call(h, ex),
                    None => ex.not_found(),
                }
                return false;
            }
        };
        ex.params_bound(start);

        run_hook(&self.hooks.after_match, ex);
        run_hook(&self.hooks.before_execute, ex);
        Handler::call(handler, ex);
        run_hook(&self.hooks.after_execute, ex);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Ex {
        method: String,
        path: String,
        query: QueryParams,
        trail: Vec<&'static str>,
        missing: bool,
        bound_from: Option<usize>,
    }

    impl Ex {
        fn new(method: &str, target: &str) -> Self {
            let (path, query) = match target.find('?') {
                Some(i) => (&target[..i], QueryParams::parse(&target[i + 1..])),
                None => (target, QueryParams::new()),
            };
            Self {
                method: method.to_owned(),
                path: path.to_owned(),
                query,
                ..Self::default()
            }
        }
    }

    impl Exchange for Ex {
        fn method(&self) -> &str {
            &self.method
        }
        fn path(&self) -> &str {
            &self.path
        }
        fn query_mut(&mut self) -> &mut QueryParams {
            &mut self.query
        }
        fn not_found(&mut self) {
            self.missing = true;
        }
        fn params_bound(&mut self, start: usize) {
            self.bound_from = Some(start);
        }
    }

    fn traced() -> Mux<Ex> {
        let mut mux = Mux::new();
        mux.before_match(|ex: &mut Ex| ex.trail.push("before_match"))
            .after_match(|ex: &mut Ex| ex.trail.push("after_match"))
            .before_execute(|ex: &mut Ex| ex.trail.push("before_execute"))
            .after_execute(|ex: &mut Ex| ex.trail.push("after_execute"))
            .get("/ping", |ex: &mut Ex| ex.trail.push("handler"));
        mux
    }

    #[test]
    fn hook_order() {
        let mux = traced();
        let mut ex = Ex::new("GET", "/ping/");
        assert!(mux.handle(&mut ex));
        assert_eq!(
            ex.trail,
            [
                "before_match",
                "after_match",
                "before_execute",
                "handler",
                "after_execute"
            ]
        );
        assert!(!ex.missing);
    }

    #[test]
    fn miss_runs_only_before_match() {
        let mux = traced();
        let mut ex = Ex::new("GET", "/nonexistent");
        assert!(!mux.handle(&mut ex));
        assert_eq!(ex.trail, ["before_match"]);
        assert!(ex.missing);

        let mut ex = Ex::new("POST", "/ping");
        assert!(!mux.handle(&mut ex));
        assert!(ex.missing);
    }

    #[test]
    fn custom_not_found() {
        let mut mux = traced();
        mux.not_found(|ex: &mut Ex| ex.trail.push("fallback"));
        let mut ex = Ex::new("GET", "/nope");
        assert!(!mux.handle(&mut ex));
        assert_eq!(ex.trail, ["before_match", "fallback"]);
        assert!(!ex.missing);
    }

    #[test]
    fn params_reach_handler() {
        let mut mux: Mux<Ex> = Mux::new();
        mux.get(r"/user/:username/:id(\d+)\.:format(\w+)", |ex: &mut Ex| {
            let seen = (
                ex.query.get("username") == Some("barbery"),
                ex.query.get("id") == Some("123"),
                ex.query.get("format") == Some("json"),
                ex.query.get("learn") == Some("kungfu"),
            );
            if seen == (true, true, true, true) {
                ex.trail.push("ok");
            }
        });

        let mut ex = Ex::new("GET", "/user/barbery/123.json?learn=kungfu");
        assert!(mux.handle(&mut ex));
        assert_eq!(ex.trail, ["ok"]);
        assert_eq!(ex.query.len(), 4);
    }

    #[test]
    fn params_start_after_hook_entries() {
        let mut mux: Mux<Ex> = Mux::new();
        mux.before_match(|ex: &mut Ex| ex.query.append("trace", "1"))
            .get("/user/:id", |_: &mut Ex| {});

        let mut ex = Ex::new("GET", "/user/7?learn=kungfu");
        assert!(mux.handle(&mut ex));
        assert_eq!(ex.bound_from, Some(2));
        let params: Vec<_> = ex.query.iter().skip(2).collect();
        assert_eq!(params, [("id", "7")]);

        let mut ex = Ex::new("GET", "/nope");
        assert!(!mux.handle(&mut ex));
        assert_eq!(ex.bound_from, None);
    }

    #[test]
    fn try_route_rejects_bad_patterns() {
        let mut mux: Mux<Ex> = Mux::new();
        assert!(mux.try_route("GET", r"/x/:id(\d+", |_: &mut Ex| {}).is_err());
        assert!(mux.try_route("GET", "/x/:id", |_: &mut Ex| {}).is_ok());
    }
}
