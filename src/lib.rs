/// Link Resolver
///
/// Resolves compact link expressions such as `product:42` or `url:~/about`
/// into a display name and a navigable url, memoized per language.
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod expression;
pub mod logging;
pub mod services;

pub use catalog::Catalog;
pub use engine::{LinkResolver, ResolutionResult, CURRENT_LANGUAGE};
pub use expression::{parse, ExpressionKind, ParsedExpression, Payload};
pub use services::Services;
