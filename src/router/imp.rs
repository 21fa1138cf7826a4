use super::captures::Captures;
use super::error::RouterError;
use super::pattern::{trim_trailing_slash, CompiledPattern, SLASH};
use super::{Route, Router};

use crate::config::{MismatchPolicy, RouterConfig};

use std::collections::HashMap;

use smallvec::SmallVec;

impl<T> Router<T> {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            config,
            table: HashMap::new(),
            max_depth: 0,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn len(&self) -> usize {
        self.table.values().map(Vec::len).sum()
    }

    pub fn insert(&mut self, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.insert_route(pattern, data) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_insert(&mut self, pattern: &str, data: T) -> Result<&mut Self, RouterError> {
        self.insert_route(pattern, data)?;
        Ok(self)
    }

    /// Routes registered under exactly this static prefix.
    pub fn routes(&self, prefix: &str) -> Option<&[Route<T>]> {
        self.table.get(prefix).map(Vec::as_slice)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> + '_ {
        self.table.keys().map(|k| &**k)
    }

    /// Resolves `path`, trying the longest static prefix first and, within a
    /// prefix, routes in registration order.
    pub fn find<'s, 'p, 't>(&'s self, path: &'p str) -> Option<(&'t T, Captures<'p>)>
    where
        's: 'p + 't,
    {
        let path = trim_trailing_slash(path);

        let mut ends: SmallVec<[usize; 8]> = path.match_indices(SLASH).map(|(i, _)| i).collect();
        ends.push(path.len());

        let depth = ends.len().min(self.max_depth);

        for &end in ends[..depth].iter().rev() {
            let routes = match self.table.get(&path[..end]) {
                Some(r) => r,
                None => continue,
            };
            for route in routes {
                match self.match_route(route, path) {
                    Matched::Yes(captures) => {
                        tracing::trace!(pattern = &*route.pattern, path, "route matched");
                        return Some((&route.data, captures));
                    }
                    Matched::No => continue,
                    Matched::Abort => return None,
                }
            }
        }

        None
    }
}

enum Matched<'a> {
    Yes(Captures<'a>),
    No,
    Abort,
}

impl<T> Router<T> {
    fn insert_route(&mut self, pattern: &str, data: T) -> Result<(), RouterError> {
        let compiled = CompiledPattern::compile(pattern, &self.config)?;
        let (prefix, regex, params) = compiled.into_parts();

        tracing::debug!(
            pattern,
            prefix = &*prefix,
            params = params.len(),
            "route registered"
        );

        let depth = prefix.matches(SLASH).count() + 1;
        self.max_depth = self.max_depth.max(depth);

        self.table.entry(prefix).or_insert_with(Vec::new).push(Route {
            pattern: pattern.into(),
            regex,
            params,
            data,
        });

        Ok(())
    }

    fn match_route<'a>(&self, route: &'a Route<T>, path: &'a str) -> Matched<'a> {
        if route.params.is_empty() {
            return if route.regex.is_match(path) {
                Matched::Yes(Captures::new())
            } else {
                Matched::No
            };
        }

        let caps = match route.regex.captures(path) {
            Some(c) => c,
            None => return Matched::No,
        };

        let groups = caps.len() - 1;
        if groups != route.params.len() {
            tracing::warn!(
                pattern = &*route.pattern,
                path,
                params = route.params.len(),
                groups,
                "capture count mismatch"
            );
            return match self.config.mismatch_policy {
                MismatchPolicy::Abort => Matched::Abort,
                MismatchPolicy::Continue => Matched::No,
            };
        }

        let mut captures = Captures::new();
        for (name, m) in route.params.iter().zip(caps.iter().skip(1)) {
            captures.push(name, m.map_or("", |m| m.as_str()));
        }
        Matched::Yes(captures)
    }
}
