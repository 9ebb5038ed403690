use super::types::DirectionsResponse;
use crate::sdk::geo::Coordinate;
use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::route::ProviderRoute;
use crate::sdk::routing::service::DirectionsProvider;
use crate::sdk::util::rate_limit::Limiter;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const ORS_BASE_URL: &str = "https://api.openrouteservice.org";
const DIRECTIONS_PATH: &str = "/v2/directions/driving-car";

/// OpenRouteService driving directions, hosted (with an api key) or
/// self-hosted (without one).
pub struct OrsDirectionsProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    limiter: Option<Limiter>,
}

impl OrsDirectionsProvider {
    pub fn remote(base_url: String, api_key: String, limiter: Limiter) -> Result<Self, RoutingError> {
        Self::build(base_url, Some(api_key), Some(limiter))
    }

    /// Self-hosted instance: no key, no client-side quota.
    pub fn local(base_url: String) -> Result<Self, RoutingError> {
        Self::build(base_url, None, None)
    }

    fn build(
        base_url: String,
        api_key: Option<String>,
        limiter: Option<Limiter>,
    ) -> Result<Self, RoutingError> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(15)).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            limiter,
        })
    }
}

#[async_trait]
impl DirectionsProvider for OrsDirectionsProvider {
    async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<ProviderRoute, RoutingError> {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }

        let url = format!("{}{}", self.base_url, DIRECTIONS_PATH);
        log::debug!(
            "[PROVIDER] Calling directions for {} -> {}",
            origin,
            destination
        );

        let mut query = Vec::with_capacity(3);
        if let Some(key) = &self.api_key {
            query.push(("api_key", key.clone()));
        }
        query.push(("start", origin.to_lon_lat_param()));
        query.push(("end", destination.to_lon_lat_param()));

        let response = match self.client.get(&url).query(&query).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("Failed to reach directions provider at {}: {}", url, e);
                return Err(RoutingError::ProviderUnavailable(e.to_string()));
            }
        };

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::warn!("Directions provider returned status {}", status);
            return Err(RoutingError::from_error_body(&text));
        }

        let directions: DirectionsResponse = serde_json::from_str(&text).map_err(|e| {
            log::error!(
                "Failed to parse DirectionsResponse. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })?;

        ProviderRoute::try_from(directions)
    }
}
