pub mod error;
pub mod provider;
pub mod resolver;
pub mod route;
pub mod service;
pub mod tracker;

pub use error::RoutingError;
pub use provider::OrsDirectionsProvider;
pub use resolver::{RouteResolver, DEFAULT_ROUTE_TIMEOUT};
pub use route::{ProviderRoute, RouteRequest, RouteResult, RouteStep};
pub use service::DirectionsProvider;
pub use tracker::{RouteTicket, RouteTracker};
