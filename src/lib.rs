pub mod sdk;

pub use sdk::config::{AppConfig, OrsConfig};
pub use sdk::geo::{distance_between, format_distance_km, midpoint, zoom_for, Coordinate, GeoError};
pub use sdk::map::MapFrame;
pub use sdk::routing::{
    DirectionsProvider, OrsDirectionsProvider, RouteRequest, RouteResolver, RouteResult,
    RouteTracker, RoutingError,
};
pub use sdk::session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
