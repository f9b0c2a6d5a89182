use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{store} is unavailable: {message}")]
    Unavailable {
        store: &'static str,
        message: String,
    },

    #[error("field '{field}' is not available on {entity}")]
    UnsupportedField { entity: String, field: String },

    #[error("no route registered for {entity}")]
    RouteNotFound { entity: String },

    #[error("'{path}' is not an application-relative virtual path")]
    InvalidVirtualPath { path: String },
}

impl LookupError {
    pub fn unavailable(store: &'static str, message: impl Into<String>) -> Self {
        Self::Unavailable {
            store,
            message: message.into(),
        }
    }

    pub fn unsupported_field(entity: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnsupportedField {
            entity: entity.into(),
            field: field.into(),
        }
    }

    pub fn route_not_found(entity: impl Into<String>) -> Self {
        Self::RouteNotFound {
            entity: entity.into(),
        }
    }

    pub fn invalid_virtual_path(path: impl Into<String>) -> Self {
        Self::InvalidVirtualPath { path: path.into() }
    }
}
