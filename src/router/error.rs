#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    #[error("invalid expression in pattern {pattern:?}: {source}")]
    InvalidExpression {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("pattern {pattern:?} declares {params} parameters but has {groups} capture groups")]
    CaptureMismatch {
        pattern: String,
        params: usize,
        groups: usize,
    },

    #[error("invalid method: {0:?}")]
    InvalidMethod(String),
}

impl RouterError {
    pub(super) fn invalid_pattern(pattern: &str, reason: &'static str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_owned(),
            reason,
        }
    }
}
