use super::error::RoutingError;
use super::route::ProviderRoute;
use crate::sdk::geo::Coordinate;
use async_trait::async_trait;

#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Gets a driving route between two points.
    async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<ProviderRoute, RoutingError>;
}
