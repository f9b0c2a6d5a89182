/// File-backed collaborators.
///
/// A catalog is a small snapshot of entities, translations, slugs and routes,
/// loaded from YAML or JSON. It implements every lookup the resolver needs,
/// which makes it usable from the command line and in tests.
pub mod loader;
pub mod paths;

pub use paths::{join_root, VirtualPathExpander};

use crate::engine::CacheConfig;
use crate::error::{LookupError, Result};
use crate::expression::{EntityId, ExpressionKind};
use crate::services::{
    fields, EntityStore, LocalizationStore, MediaUrlService, PathExpander, Router, SlugStore,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const SE_NAME_PLACEHOLDER: &str = "{se_name}";

fn default_working_language() -> u32 {
    1
}

fn default_app_root() -> String {
    "/".to_string()
}

fn default_media_path() -> String {
    "media".to_string()
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_working_language")]
    pub working_language: u32,

    #[serde(default = "default_app_root")]
    pub app_root: String,

    /// Media urls are `<app_root>/<media_path>/<id>/<seo_filename>`
    #[serde(default = "default_media_path")]
    pub media_path: String,

    #[serde(default)]
    pub cache_ttl_secs: Option<u64>,

    #[serde(default)]
    pub max_cache_entries: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            working_language: default_working_language(),
            app_root: default_app_root(),
            media_path: default_media_path(),
            cache_ttl_secs: None,
            max_cache_entries: None,
        }
    }
}

impl Settings {
    pub fn cache_config(&self) -> CacheConfig {
        let defaults = CacheConfig::default();
        CacheConfig {
            ttl: self.cache_ttl_secs.map(Duration::from_secs),
            max_entries: self.max_cache_entries.unwrap_or(defaults.max_entries),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedRecord {
    pub language: u32,
    pub entity: ExpressionKind,
    pub id: EntityId,
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlugRecord {
    pub entity: ExpressionKind,
    pub id: EntityId,
    /// `0` marks the language-neutral slug
    #[serde(default)]
    pub language: u32,
    pub slug: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub settings: Settings,

    /// kind -> id -> field -> value
    pub entities: HashMap<ExpressionKind, HashMap<EntityId, HashMap<String, String>>>,

    pub localized: Vec<LocalizedRecord>,

    pub slugs: Vec<SlugRecord>,

    /// Explicit media urls, taking precedence over the generated ones
    pub media: HashMap<EntityId, String>,

    /// Route templates per kind, e.g. `product: "/p/{se_name}"`
    pub routes: HashMap<ExpressionKind, String>,
}

impl Catalog {
    pub fn entity_count(&self) -> usize {
        self.entities.values().map(HashMap::len).sum()
    }

    pub fn path_expander(&self) -> VirtualPathExpander {
        VirtualPathExpander::new(self.settings.app_root.clone())
    }

    fn field(&self, kind: ExpressionKind, id: EntityId, field: &str) -> Option<&str> {
        self.entities
            .get(&kind)
            .and_then(|by_id| by_id.get(&id))
            .and_then(|fields| fields.get(field))
            .map(String::as_str)
    }
}

fn entity_kind(entity_name: &str) -> Option<ExpressionKind> {
    entity_name
        .parse::<ExpressionKind>()
        .ok()
        .filter(ExpressionKind::is_entity)
}

impl EntityStore for Catalog {
    fn get_field(&self, kind: ExpressionKind, entity_id: EntityId, field: &str) -> Result<String> {
        if !kind.is_entity() {
            return Err(LookupError::unsupported_field(kind.as_str(), field).into());
        }
        Ok(self.field(kind, entity_id, field).unwrap_or_default().to_string())
    }
}

impl LocalizationStore for Catalog {
    fn get_localized_value(
        &self,
        language_id: u32,
        entity_id: EntityId,
        entity_name: &str,
        field: &str,
    ) -> Result<String> {
        let value = self
            .localized
            .iter()
            .find(|record| {
                record.language == language_id
                    && record.id == entity_id
                    && record.entity.as_str().eq_ignore_ascii_case(entity_name)
                    && record.field.eq_ignore_ascii_case(field)
            })
            .map(|record| record.value.clone())
            .unwrap_or_default();
        Ok(value)
    }
}

impl SlugStore for Catalog {
    fn get_active_slug(
        &self,
        entity_id: EntityId,
        entity_name: &str,
        language_id: u32,
    ) -> Result<String> {
        let slug = self
            .slugs
            .iter()
            .find(|record| {
                record.active
                    && record.id == entity_id
                    && record.language == language_id
                    && record.entity.as_str().eq_ignore_ascii_case(entity_name)
            })
            .map(|record| record.slug.clone())
            .unwrap_or_default();
        Ok(slug)
    }
}

impl MediaUrlService for Catalog {
    fn get_url(&self, picture_id: EntityId) -> Result<String> {
        if let Some(url) = self.media.get(&picture_id) {
            return Ok(url.clone());
        }
        let url = self
            .field(ExpressionKind::Media, picture_id, fields::SEO_FILENAME)
            .filter(|filename| !filename.is_empty())
            .map(|filename| {
                let path = format!(
                    "{}/{picture_id}/{filename}",
                    self.settings.media_path.trim_matches('/')
                );
                join_root(&self.settings.app_root, &path)
            })
            .unwrap_or_default();
        Ok(url)
    }
}

impl Router for Catalog {
    fn route_url(&self, entity_name: &str, se_name: &str) -> Result<String> {
        let kind =
            entity_kind(entity_name).ok_or_else(|| LookupError::route_not_found(entity_name))?;
        let path = match self.routes.get(&kind) {
            Some(template) => template.replace(SE_NAME_PLACEHOLDER, se_name),
            None => se_name.to_string(),
        };
        Ok(join_root(&self.settings.app_root, &path))
    }
}

impl PathExpander for Catalog {
    fn to_absolute(&self, virtual_path: &str) -> Result<String> {
        self.path_expander().to_absolute(virtual_path)
    }
}
