use crate::engine::strategies::expand_url;
use crate::engine::{Operation, ResolveContext, Strategy};
use crate::expression::{EntityId, ExpressionKind, ParsedExpression};
use tracing::trace;

/// Language-neutral slugs are stored under this language id.
const NEUTRAL_LANGUAGE_ID: u32 = 0;

/// Navigable url for a link target.
pub struct LinkStrategy;

impl Default for LinkStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkStrategy {
    pub fn new() -> Self {
        Self
    }

    fn active_slug(
        &self,
        ctx: &ResolveContext,
        kind: ExpressionKind,
        id: EntityId,
        language_id: u32,
    ) -> String {
        trace!(entity = kind.as_str(), id, language_id, "slug lookup");
        let result = ctx
            .services()
            .slugs
            .get_active_slug(id, kind.as_str(), language_id);
        ctx.or_empty("active slug", result)
    }

    /// Slug for the request language, then the neutral slug, then the route.
    /// No slug at all leaves the link empty.
    fn resolve_routed(&self, kind: ExpressionKind, id: EntityId, ctx: &ResolveContext) -> String {
        let mut slug = self.active_slug(ctx, kind, id, ctx.language_id());
        if slug.is_empty() {
            slug = self.active_slug(ctx, kind, id, NEUTRAL_LANGUAGE_ID);
        }
        if slug.is_empty() {
            return String::new();
        }
        let result = ctx.services().router.route_url(kind.as_str(), &slug);
        ctx.or_empty("route url", result)
    }

    fn resolve_media(&self, id: EntityId, ctx: &ResolveContext) -> String {
        let result = ctx.services().media.get_url(id);
        ctx.or_empty("media url", result)
    }
}

impl Strategy for LinkStrategy {
    fn name(&self) -> &'static str {
        "link"
    }

    fn operation(&self) -> Operation {
        Operation::Link
    }

    fn resolve(&self, expression: &ParsedExpression, ctx: &ResolveContext) -> String {
        let payload = expression.payload();
        match expression.kind() {
            kind @ (ExpressionKind::Product
            | ExpressionKind::Category
            | ExpressionKind::Manufacturer
            | ExpressionKind::Topic) => payload
                .entity_id()
                .map_or_else(String::new, |id| self.resolve_routed(kind, id, ctx)),
            ExpressionKind::Media => payload
                .entity_id()
                .map_or_else(String::new, |id| self.resolve_media(id, ctx)),
            ExpressionKind::Url => expand_url(&payload.to_string(), ctx),
            ExpressionKind::File => payload.to_string(),
        }
    }
}
