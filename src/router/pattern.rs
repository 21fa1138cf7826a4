//! Pattern compiler.
//!
//! A pattern such as `/user/:username/:id(\d+)\.:format(\w+)` is split into
//! a static prefix (`/user`), an anchored expression
//! (`^/user/([^/]+)/(\d+)\.(\w+)$`) and the ordered parameter names.

use super::error::RouterError;
use crate::config::RouterConfig;

use once_cell::sync::Lazy;
use regex::{Captures as RegexCaptures, NoExpand, Regex};

pub(super) const SLASH: char = '/';

static PARAM_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r":([0-9A-Za-z_]+)").unwrap());
static PARAM_WITH_EXPR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":[0-9A-Za-z_]+(\(.*?\))").unwrap());

#[derive(Debug)]
pub struct CompiledPattern {
    prefix: Box<str>,
    regex: Regex,
    params: Box<[Box<str>]>,
}

impl CompiledPattern {
    /// The empty pattern is the root, same as `"/"`.
    pub fn compile(pattern: &str, config: &RouterConfig) -> Result<Self, RouterError> {
        if !pattern.is_empty() && !pattern.starts_with(SLASH) {
            return Err(RouterError::invalid_pattern(
                pattern,
                "pattern must start with '/'",
            ));
        }

        let trimmed = trim_trailing_slash(pattern);

        let prefix = static_prefix(trimmed);

        let params: Box<[Box<str>]> = PARAM_NAME
            .captures_iter(trimmed)
            .map(|caps| caps[1].into())
            .collect();

        let with_expr = PARAM_WITH_EXPR.replace_all(trimmed, |caps: &RegexCaptures<'_>| {
            caps[1].to_owned()
        });
        let default_group = format!("({})", config.default_param_expr);
        let expr = PARAM_NAME.replace_all(&with_expr, NoExpand(&default_group));

        let regex = Regex::new(&format!("^{}$", expr)).map_err(|source| {
            RouterError::InvalidExpression {
                pattern: pattern.to_owned(),
                source,
            }
        })?;

        let groups = regex.captures_len() - 1;
        if groups != params.len() {
            if config.strict_captures {
                return Err(RouterError::CaptureMismatch {
                    pattern: pattern.to_owned(),
                    params: params.len(),
                    groups,
                });
            }
            tracing::warn!(
                pattern,
                params = params.len(),
                groups,
                "capture groups do not line up with parameters"
            );
        }

        Ok(Self {
            prefix: prefix.into(),
            regex,
            params,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn params(&self) -> &[Box<str>] {
        &self.params
    }

    pub(super) fn into_parts(self) -> (Box<str>, Regex, Box<[Box<str>]>) {
        (self.prefix, self.regex, self.params)
    }
}

#[inline]
pub(super) fn trim_trailing_slash(s: &str) -> &str {
    s.trim_end_matches(SLASH)
}

/// Leading run of literal segments, stopping at the first segment that holds
/// a parameter token.
fn static_prefix(pattern: &str) -> &str {
    let mut end = 0;
    for (i, part) in pattern.split(SLASH).enumerate() {
        if PARAM_NAME.is_match(part) {
            break;
        }
        end = if i == 0 { part.len() } else { end + 1 + part.len() };
    }
    &pattern[..end]
}
