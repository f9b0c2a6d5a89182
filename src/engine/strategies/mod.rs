// Resolution strategies, one per operation.
//
// Each strategy matches exhaustively over the expression kind and runs that
// kind's fallback chain against the collaborators in the context.
//
// 1. DisplayName - localized name / title, then the stored base field
// 2. Link        - slug for the language, then the neutral slug, then the route

pub mod display_name;
pub mod link;

pub use display_name::DisplayNameStrategy;
pub use link::LinkStrategy;

use crate::engine::ResolveContext;
use tracing::warn;

/// Expand `~` virtual paths; anything else is returned unchanged.
///
/// A path the expander rejects is kept as written.
pub(crate) fn expand_url(url: &str, ctx: &ResolveContext) -> String {
    if !url.starts_with('~') {
        return url.to_string();
    }
    match ctx.services().paths.to_absolute(url) {
        Ok(expanded) => expanded,
        Err(err) => {
            warn!(url, error = %err, "virtual path expansion failed");
            url.to_string()
        }
    }
}
