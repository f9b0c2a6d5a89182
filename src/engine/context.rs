/// Resolution context handed to strategies.
///
/// Carries the collaborators and the concrete language of the request, and
/// wraps each collaborator call so a failure reads as "nothing found".
use crate::error::Result;
use crate::services::Services;
use tracing::warn;

pub struct ResolveContext<'a> {
    services: &'a Services,

    /// Resolved working language, never the `0` sentinel
    language_id: u32,
}

impl<'a> ResolveContext<'a> {
    pub fn new(services: &'a Services, language_id: u32) -> Self {
        Self {
            services,
            language_id,
        }
    }

    pub fn services(&self) -> &Services {
        self.services
    }

    pub fn language_id(&self) -> u32 {
        self.language_id
    }

    /// Collapse a collaborator result into a string, logging failures.
    pub fn or_empty(&self, lookup: &str, result: Result<String>) -> String {
        match result {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    lookup,
                    language_id = self.language_id,
                    error = %err,
                    "lookup failed, treating as empty"
                );
                String::new()
            }
        }
    }
}
