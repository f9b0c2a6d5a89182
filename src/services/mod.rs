/// Collaborator interfaces consumed by the resolver.
///
/// Storage, localization, slugs, media urls and routing live outside this
/// crate. Each lookup returns an empty string for "not found"; an `Err` means
/// the collaborator itself failed and is treated the same way by the engine.
use crate::error::Result;
use crate::expression::{EntityId, ExpressionKind};
use std::sync::Arc;

pub mod fields {
    pub const NAME: &str = "Name";
    pub const SHORT_TITLE: &str = "ShortTitle";
    pub const TITLE: &str = "Title";
    pub const SYSTEM_NAME: &str = "SystemName";
    pub const SEO_FILENAME: &str = "SeoFilename";
}

/// Read-only access to a single scalar field of an entity, by primary key.
pub trait EntityStore: Send + Sync {
    fn get_field(&self, kind: ExpressionKind, entity_id: EntityId, field: &str) -> Result<String>;
}

pub trait LocalizationStore: Send + Sync {
    fn get_localized_value(
        &self,
        language_id: u32,
        entity_id: EntityId,
        entity_name: &str,
        field: &str,
    ) -> Result<String>;
}

pub trait SlugStore: Send + Sync {
    /// Active slug for exactly this language; `0` is the language-neutral slug.
    fn get_active_slug(
        &self,
        entity_id: EntityId,
        entity_name: &str,
        language_id: u32,
    ) -> Result<String>;
}

pub trait MediaUrlService: Send + Sync {
    fn get_url(&self, picture_id: EntityId) -> Result<String>;
}

pub trait Router: Send + Sync {
    fn route_url(&self, entity_name: &str, se_name: &str) -> Result<String>;
}

pub trait PathExpander: Send + Sync {
    /// Expand an application-relative `~` path into an absolute one.
    fn to_absolute(&self, virtual_path: &str) -> Result<String>;
}

pub trait WorkingLanguageProvider: Send + Sync {
    fn current_language_id(&self) -> u32;
}

/// Fixed working language, for hosts without a per-request language.
#[derive(Debug, Clone, Copy)]
pub struct FixedLanguage(pub u32);

impl WorkingLanguageProvider for FixedLanguage {
    fn current_language_id(&self) -> u32 {
        self.0
    }
}

/// Handles to every collaborator the strategies call.
#[derive(Clone)]
pub struct Services {
    pub entities: Arc<dyn EntityStore>,
    pub localization: Arc<dyn LocalizationStore>,
    pub slugs: Arc<dyn SlugStore>,
    pub media: Arc<dyn MediaUrlService>,
    pub router: Arc<dyn Router>,
    pub paths: Arc<dyn PathExpander>,
}

impl Services {
    /// Use one value that implements every lookup trait, e.g. a loaded catalog.
    pub fn from_shared<T>(shared: Arc<T>) -> Self
    where
        T: EntityStore
            + LocalizationStore
            + SlugStore
            + MediaUrlService
            + Router
            + PathExpander
            + 'static,
    {
        Self {
            entities: shared.clone(),
            localization: shared.clone(),
            slugs: shared.clone(),
            media: shared.clone(),
            router: shared.clone(),
            paths: shared,
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
