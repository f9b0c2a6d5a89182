/// Link expressions.
///
/// A link expression is a compact `kind:value` string embedded in editor
/// content, e.g. `product:42` or `url:~/about`. Parsing never fails: anything
/// that is not a well-formed entity reference degrades to a generic url.
pub mod parser;

pub use parser::parse;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary key of a catalog or content entity. Always non-zero once parsed.
pub type EntityId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionKind {
    Product,
    Category,
    Manufacturer,
    Topic,
    Media,
    Url,
    File,
}

impl ExpressionKind {
    pub const ALL: [ExpressionKind; 7] = [
        ExpressionKind::Product,
        ExpressionKind::Category,
        ExpressionKind::Manufacturer,
        ExpressionKind::Topic,
        ExpressionKind::Media,
        ExpressionKind::Url,
        ExpressionKind::File,
    ];

    /// Entity kind name used by the localization, slug and routing lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpressionKind::Product => "Product",
            ExpressionKind::Category => "Category",
            ExpressionKind::Manufacturer => "Manufacturer",
            ExpressionKind::Topic => "Topic",
            ExpressionKind::Media => "Media",
            ExpressionKind::Url => "Url",
            ExpressionKind::File => "File",
        }
    }

    /// Lowercase spelling shown to users, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            ExpressionKind::Product => "product",
            ExpressionKind::Category => "category",
            ExpressionKind::Manufacturer => "manufacturer",
            ExpressionKind::Topic => "topic",
            ExpressionKind::Media => "media",
            ExpressionKind::Url => "url",
            ExpressionKind::File => "file",
        }
    }

    /// Kinds whose payload is an entity id rather than a plain string.
    pub fn is_entity(&self) -> bool {
        !matches!(self, ExpressionKind::Url | ExpressionKind::File)
    }

    /// Case-insensitive match of an expression prefix against the kind names.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(prefix))
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown expression kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ExpressionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_prefix(s).ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    EntityId(EntityId),
    Text(String),
}

impl Payload {
    pub fn entity_id(&self) -> Option<EntityId> {
        match self {
            Payload::EntityId(id) => Some(*id),
            Payload::Text(_) => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::EntityId(id) => write!(f, "{id}"),
            Payload::Text(text) => f.write_str(text),
        }
    }
}

/// A typed link expression.
///
/// Entity kinds always carry `Payload::EntityId`, `Url` and `File` always
/// carry `Payload::Text`. The constructors keep that pairing intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
    kind: ExpressionKind,
    payload: Payload,
}

impl ParsedExpression {
    /// Returns `None` for non-entity kinds or a zero id.
    pub fn entity(kind: ExpressionKind, id: EntityId) -> Option<Self> {
        if !kind.is_entity() || id == 0 {
            return None;
        }
        Some(Self {
            kind,
            payload: Payload::EntityId(id),
        })
    }

    pub fn url(value: impl Into<String>) -> Self {
        Self {
            kind: ExpressionKind::Url,
            payload: Payload::Text(value.into()),
        }
    }

    pub fn file(value: impl Into<String>) -> Self {
        Self {
            kind: ExpressionKind::File,
            payload: Payload::Text(value.into()),
        }
    }

    pub fn kind(&self) -> ExpressionKind {
        self.kind
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_parts(self) -> (ExpressionKind, Payload) {
        (self.kind, self.payload)
    }
}
