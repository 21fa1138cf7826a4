use serde::{Deserialize, Serialize};

/// What the matcher does when a route's capture groups disagree with its
/// declared parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// The whole request resolves to no match.
    Abort,
    /// The route is skipped and scanning goes on.
    Continue,
}

impl Default for MismatchPolicy {
    fn default() -> Self {
        Self::Abort
    }
}

/// Router settings, shared by every method table of a router.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Expression used for a bare `:name` token. It is wrapped in a capture group.
    pub default_param_expr: String,

    /// Reject patterns whose capture groups do not line up with their parameters.
    pub strict_captures: bool,

    pub mismatch_policy: MismatchPolicy,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_param_expr: String::from("[^/]+"),
            strict_captures: false,
            mismatch_policy: MismatchPolicy::Abort,
        }
    }
}
