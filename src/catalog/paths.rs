use crate::error::{LookupError, Result};
use crate::services::PathExpander;

/// Join an application root and a relative path with exactly one `/`.
pub fn join_root(app_root: &str, path: &str) -> String {
    let root = app_root.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{root}/{path}")
}

/// Expands `~` application-relative paths against a fixed application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualPathExpander {
    app_root: String,
}

impl VirtualPathExpander {
    pub fn new(app_root: impl Into<String>) -> Self {
        Self {
            app_root: app_root.into(),
        }
    }
}

impl Default for VirtualPathExpander {
    fn default() -> Self {
        Self::new("/")
    }
}

impl PathExpander for VirtualPathExpander {
    fn to_absolute(&self, virtual_path: &str) -> Result<String> {
        let Some(rest) = virtual_path.strip_prefix('~') else {
            return Ok(virtual_path.to_string());
        };
        if !rest.is_empty() && !rest.starts_with('/') {
            return Err(LookupError::invalid_virtual_path(virtual_path).into());
        }
        Ok(join_root(&self.app_root, rest))
    }
}
