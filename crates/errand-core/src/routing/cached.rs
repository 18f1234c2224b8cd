//! Caching decorator for route providers.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::{ProviderLeg, RouteLegProvider, RouteRequest};
use crate::{cache::TtlCache, error::Result};

/// Cache of provider legs keyed by [`RouteRequest::cache_key`].
pub type RouteCache = TtlCache<String, ProviderLeg>;

/// Wraps a provider and answers repeated requests from a shared cache.
///
/// Only successful routes are cached; "no route" answers and errors always go
/// back to the wrapped provider next time.
pub struct CachedRouteProvider<P> {
    inner: P,
    cache: Arc<RouteCache>,
}

impl<P> CachedRouteProvider<P> {
    pub fn new(inner: P, cache: Arc<RouteCache>) -> Self {
        Self { inner, cache }
    }

    /// Handle to the cache backing this provider.
    pub fn cache(&self) -> &Arc<RouteCache> {
        &self.cache
    }
}

#[async_trait]
impl<P: RouteLegProvider> RouteLegProvider for CachedRouteProvider<P> {
    async fn route_leg(&self, request: &RouteRequest) -> Result<Option<ProviderLeg>> {
        let key = request.cache_key();

        if let Some(leg) = self.cache.get(&key) {
            debug!("Route cache hit: {key}");
            return Ok(Some(leg));
        }

        debug!("Route cache miss: {key}");
        let leg = self.inner.route_leg(request).await?;
        if let Some(leg) = &leg {
            self.cache.insert(key, leg.clone());
        }
        Ok(leg)
    }
}
