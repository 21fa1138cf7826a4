mod captures;
mod error;
mod imp;
mod pattern;

pub use self::captures::Captures;
pub use self::error::RouterError;
pub use self::pattern::CompiledPattern;

use crate::config::RouterConfig;

use std::collections::HashMap;

use regex::Regex;

/// Route table of a single method: static prefix to routes in registration order.
#[derive(Debug, Default)]
pub struct Router<T> {
    config: RouterConfig,
    table: HashMap<Box<str>, Vec<Route<T>>>,
    max_depth: usize,
}

#[derive(Debug)]
pub struct Route<T> {
    pattern: Box<str>,
    regex: Regex,
    params: Box<[Box<str>]>,
    data: T,
}

impl<T> Route<T> {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn params(&self) -> &[Box<str>] {
        &self.params
    }

    pub fn data(&self) -> &T {
        &self.data
    }
}
