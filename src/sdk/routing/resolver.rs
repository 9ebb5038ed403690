use super::error::RoutingError;
use super::route::{ProviderRoute, RouteRequest, RouteResult};
use super::service::DirectionsProvider;
use super::tracker::{RouteTicket, RouteTracker};
use std::time::Duration;

pub const DEFAULT_ROUTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Turns a [`RouteRequest`] into a renderable [`RouteResult`].
///
/// One provider attempt per call, bounded by `timeout`. Any provider
/// failure (transport, status, payload) produces the straight-line
/// fallback; nothing provider-related is returned as an error.
pub struct RouteResolver<P> {
    provider: P,
    timeout: Duration,
}

impl<P: DirectionsProvider> RouteResolver<P> {
    pub fn new(provider: P, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn resolve(&self, request: &RouteRequest) -> RouteResult {
        match self.fetch(request).await {
            Ok(route) => {
                let result = RouteResult::from_provider(route);
                log::debug!(
                    "Route {} -> {}: {:?} km, {} steps",
                    request.origin,
                    request.destination,
                    result.distance_km,
                    result.steps.len()
                );
                result
            }
            Err(err) => {
                log::warn!(
                    "Falling back to a direct line for {} -> {}: {}",
                    request.origin,
                    request.destination,
                    err
                );
                RouteResult::fallback(request)
            }
        }
    }

    /// Like [`resolve`](Self::resolve), but returns `None` when `ticket`
    /// was superseded or cancelled while the provider was answering.
    pub async fn resolve_tracked(
        &self,
        tracker: &RouteTracker,
        ticket: RouteTicket,
        request: &RouteRequest,
    ) -> Option<RouteResult> {
        if !tracker.is_current(ticket) {
            return None;
        }
        let result = self.resolve(request).await;
        if tracker.is_current(ticket) {
            Some(result)
        } else {
            log::debug!(
                "Discarding stale route {} -> {}",
                request.origin,
                request.destination
            );
            None
        }
    }

    async fn fetch(&self, request: &RouteRequest) -> Result<ProviderRoute, RoutingError> {
        tokio::time::timeout(
            self.timeout,
            self.provider.directions(request.origin, request.destination),
        )
        .await
        .map_err(|_| RoutingError::Timeout(self.timeout.as_millis()))??
        .validate()
    }
}
