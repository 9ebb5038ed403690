pub mod api;
pub mod config;
pub mod geo;
pub mod listings;
pub mod map;
pub mod routing;
pub mod session;
pub mod util;
