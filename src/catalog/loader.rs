use super::Catalog;
use crate::error::CatalogError;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const INLINE_ORIGIN: &str = "<inline>";

impl Catalog {
    /// Load a catalog file; the format follows the extension (yaml, yml, json).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading catalog");

        if !path.exists() {
            return Err(CatalogError::file_not_found(path));
        }
        let content = fs::read_to_string(path).map_err(|e| CatalogError::read_error(path, e))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let catalog = Self::parse(&content, extension, path)?;

        info!(
            entities = catalog.entity_count(),
            localized = catalog.localized.len(),
            slugs = catalog.slugs.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    #[cfg(test)]
    pub(crate) fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        Self::parse(content, "yaml", Path::new(INLINE_ORIGIN))
    }

    fn parse(content: &str, extension: &str, origin: &Path) -> Result<Self, CatalogError> {
        let catalog: Catalog = match extension {
            "json" => serde_json::from_str(content)
                .map_err(|e| CatalogError::invalid_catalog(origin, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(content)
                .map_err(|e| CatalogError::invalid_catalog(origin, e.to_string()))?,
            _ => return Err(CatalogError::unsupported_format(extension)),
        };
        catalog.validate(origin)?;
        Ok(catalog)
    }

    /// Language `0` means "current language" to the resolver, so it cannot
    /// itself be the working language.
    fn validate(&self, origin: &Path) -> Result<(), CatalogError> {
        if self.settings.working_language == 0 {
            return Err(CatalogError::zero_working_language(origin));
        }
        Ok(())
    }
}
