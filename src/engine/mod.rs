pub mod cache;
pub mod context;
pub mod result;
pub mod strategies;

pub use cache::{CacheConfig, CacheKey, CacheStore, MemoryCache, Operation};
pub use context::ResolveContext;
pub use result::ResolutionResult;

use crate::expression::{self, ParsedExpression};
use crate::services::{FixedLanguage, Services, WorkingLanguageProvider};
use std::sync::Arc;
use strategies::{DisplayNameStrategy, LinkStrategy};
use tracing::{debug, debug_span, warn};

/// Language id meaning "the caller's current working language".
pub const CURRENT_LANGUAGE: u32 = 0;

const DEFAULT_LANGUAGE_ID: u32 = 1;

pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn operation(&self) -> Operation;
    fn resolve(&self, expression: &ParsedExpression, ctx: &ResolveContext) -> String;
}

/// Resolves link expressions into display names and urls, memoizing each
/// (operation, expression, language) result.
pub struct LinkResolver {
    services: Services,
    language: Arc<dyn WorkingLanguageProvider>,
    cache: Arc<dyn CacheStore>,
    display_name: Box<dyn Strategy>,
    link: Box<dyn Strategy>,
}

impl LinkResolver {
    pub fn new(services: Services) -> Self {
        Self::builder(services).build()
    }

    pub fn builder(services: Services) -> LinkResolverBuilder {
        LinkResolverBuilder::new(services)
    }

    /// Parse without resolving or caching.
    pub fn parse(&self, expression: &str) -> ParsedExpression {
        expression::parse(expression)
    }

    /// Display name for `expression`. Pass [`CURRENT_LANGUAGE`] to use the
    /// working language.
    pub fn get_display_name(&self, expression: &str, language_id: u32) -> ResolutionResult {
        self.resolve_cached(self.display_name.as_ref(), expression, language_id)
    }

    /// Url for `expression`. Pass [`CURRENT_LANGUAGE`] to use the working
    /// language.
    pub fn get_link(&self, expression: &str, language_id: u32) -> ResolutionResult {
        self.resolve_cached(self.link.as_ref(), expression, language_id)
    }

    /// Drop both cached results for an expression in one language.
    pub fn invalidate(&self, expression: &str, language_id: u32) {
        let language_id = self.working_language(language_id);
        for operation in [Operation::DisplayName, Operation::Link] {
            self.cache
                .invalidate(&CacheKey::new(operation, expression, language_id));
        }
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache(&self) -> &dyn CacheStore {
        self.cache.as_ref()
    }

    /// Never returns [`CURRENT_LANGUAGE`]: a provider reporting `0` falls
    /// back to the default language.
    fn working_language(&self, language_id: u32) -> u32 {
        if language_id != CURRENT_LANGUAGE {
            return language_id;
        }
        match self.language.current_language_id() {
            CURRENT_LANGUAGE => {
                warn!(
                    fallback = DEFAULT_LANGUAGE_ID,
                    "working language provider returned 0, using default language"
                );
                DEFAULT_LANGUAGE_ID
            }
            id => id,
        }
    }

    fn resolve_cached(
        &self,
        strategy: &dyn Strategy,
        expression: &str,
        language_id: u32,
    ) -> ResolutionResult {
        let language_id = self.working_language(language_id);
        let key = CacheKey::new(strategy.operation(), expression, language_id);

        if let Some(hit) = self.cache.get(&key) {
            debug!(expression, language_id, operation = key.operation.as_str(), "cache hit");
            return hit;
        }

        self.cache.get_or_compute(key, &|| {
            let span = debug_span!("resolve", strategy = strategy.name(), expression, language_id);
            let _enter = span.enter();

            let parsed = expression::parse(expression);
            let ctx = ResolveContext::new(&self.services, language_id);
            let resolved = strategy.resolve(&parsed, &ctx);
            let result = ResolutionResult::unresolved(parsed).with_resolved(resolved);
            debug!(
                kind = %result.kind,
                resolved = result.is_resolved(),
                "resolved"
            );
            result
        })
    }
}

pub struct LinkResolverBuilder {
    services: Services,
    language: Arc<dyn WorkingLanguageProvider>,
    cache: Option<Arc<dyn CacheStore>>,
    cache_config: CacheConfig,
}

impl LinkResolverBuilder {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            language: Arc::new(FixedLanguage(DEFAULT_LANGUAGE_ID)),
            cache: None,
            cache_config: CacheConfig::default(),
        }
    }

    pub fn with_language_provider<P>(mut self, provider: P) -> Self
    where
        P: WorkingLanguageProvider + 'static,
    {
        self.language = Arc::new(provider);
        self
    }

    pub fn with_working_language(self, language_id: u32) -> Self {
        self.with_language_provider(FixedLanguage(language_id))
    }

    /// Share an existing cache store. Overrides `with_cache_config`.
    pub fn with_cache(mut self, cache: Arc<dyn CacheStore>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_cache_config(mut self, config: CacheConfig) -> Self {
        self.cache_config = config;
        self
    }

    pub fn build(self) -> LinkResolver {
        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(MemoryCache::with_config(self.cache_config)));

        LinkResolver {
            services: self.services,
            language: self.language,
            cache,
            display_name: Box::new(DisplayNameStrategy::new()),
            link: Box::new(LinkStrategy::new()),
        }
    }
}
