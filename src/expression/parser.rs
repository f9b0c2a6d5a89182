use super::{EntityId, ExpressionKind, ParsedExpression};

/// Parse a raw link expression.
///
/// Never fails. Input without a known `kind:` prefix is a url, and an entity
/// prefix whose value is not a positive id turns the *whole* raw string into
/// a url payload.
pub fn parse(raw: &str) -> ParsedExpression {
    if raw.trim().is_empty() {
        return ParsedExpression::url("");
    }

    let Some((prefix, value)) = raw.split_once(':') else {
        return ParsedExpression::url(raw);
    };

    let Some(kind) = ExpressionKind::from_prefix(prefix) else {
        return ParsedExpression::url(raw);
    };

    match kind {
        ExpressionKind::Product
        | ExpressionKind::Category
        | ExpressionKind::Manufacturer
        | ExpressionKind::Topic
        | ExpressionKind::Media => parse_entity_id(value)
            .and_then(|id| ParsedExpression::entity(kind, id))
            .unwrap_or_else(|| ParsedExpression::url(raw)),
        ExpressionKind::Url => ParsedExpression::url(value),
        ExpressionKind::File => ParsedExpression::file(value),
    }
}

fn parse_entity_id(value: &str) -> Option<EntityId> {
    value.trim().parse::<EntityId>().ok().filter(|id| *id != 0)
}
