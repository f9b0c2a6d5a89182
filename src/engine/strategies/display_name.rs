use crate::engine::strategies::expand_url;
use crate::engine::{Operation, ResolveContext, Strategy};
use crate::expression::{EntityId, ExpressionKind, ParsedExpression};
use crate::services::fields;
use tracing::trace;

/// Human-readable name for a link target.
pub struct DisplayNameStrategy;

impl Default for DisplayNameStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayNameStrategy {
    pub fn new() -> Self {
        Self
    }

    fn localized(
        &self,
        ctx: &ResolveContext,
        kind: ExpressionKind,
        id: EntityId,
        field: &str,
    ) -> String {
        trace!(entity = kind.as_str(), id, field, "localized lookup");
        let result = ctx.services().localization.get_localized_value(
            ctx.language_id(),
            id,
            kind.as_str(),
            field,
        );
        ctx.or_empty("localized value", result)
    }

    fn stored(
        &self,
        ctx: &ResolveContext,
        kind: ExpressionKind,
        id: EntityId,
        field: &str,
    ) -> String {
        trace!(entity = kind.as_str(), id, field, "entity store lookup");
        let result = ctx.services().entities.get_field(kind, id, field);
        ctx.or_empty("entity field", result)
    }

    /// Localized `Name`, then the stored base `Name`.
    fn resolve_name(&self, kind: ExpressionKind, id: EntityId, ctx: &ResolveContext) -> String {
        let mut name = self.localized(ctx, kind, id, fields::NAME);
        if name.is_empty() {
            name = self.stored(ctx, kind, id, fields::NAME);
        }
        name
    }

    /// Localized `ShortTitle`, localized `Title`, then the stored `SystemName`.
    fn resolve_topic(&self, id: EntityId, ctx: &ResolveContext) -> String {
        let kind = ExpressionKind::Topic;
        let mut title = self.localized(ctx, kind, id, fields::SHORT_TITLE);
        if title.is_empty() {
            title = self.localized(ctx, kind, id, fields::TITLE);
        }
        if title.is_empty() {
            title = self.stored(ctx, kind, id, fields::SYSTEM_NAME);
        }
        title
    }

    // Media filenames are not localized.
    fn resolve_media(&self, id: EntityId, ctx: &ResolveContext) -> String {
        self.stored(ctx, ExpressionKind::Media, id, fields::SEO_FILENAME)
    }
}

impl Strategy for DisplayNameStrategy {
    fn name(&self) -> &'static str {
        "display_name"
    }

    fn operation(&self) -> Operation {
        Operation::DisplayName
    }

    fn resolve(&self, expression: &ParsedExpression, ctx: &ResolveContext) -> String {
        let payload = expression.payload();
        match expression.kind() {
            kind @ (ExpressionKind::Product
            | ExpressionKind::Category
            | ExpressionKind::Manufacturer) => payload
                .entity_id()
                .map_or_else(String::new, |id| self.resolve_name(kind, id, ctx)),
            ExpressionKind::Topic => payload
                .entity_id()
                .map_or_else(String::new, |id| self.resolve_topic(id, ctx)),
            ExpressionKind::Media => payload
                .entity_id()
                .map_or_else(String::new, |id| self.resolve_media(id, ctx)),
            ExpressionKind::Url => expand_url(&payload.to_string(), ctx),
            ExpressionKind::File => payload.to_string(),
        }
    }
}
