/// Outcome of resolving a link expression.
///
/// Carries the matched kind and payload alongside the computed display name
/// or url, so callers can tell an entity link from a plain url.
use crate::expression::{ExpressionKind, ParsedExpression, Payload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub kind: ExpressionKind,

    pub payload: Payload,

    /// Display name or url. Empty means nothing was found.
    pub resolved: String,
}

impl ResolutionResult {
    /// Unresolved result for a freshly parsed expression
    pub fn unresolved(expression: ParsedExpression) -> Self {
        let (kind, payload) = expression.into_parts();
        Self {
            kind,
            payload,
            resolved: String::new(),
        }
    }

    pub fn with_resolved(mut self, resolved: impl Into<String>) -> Self {
        self.resolved = resolved.into();
        self
    }

    pub fn is_resolved(&self) -> bool {
        !self.resolved.is_empty()
    }
}
