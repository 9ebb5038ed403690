pub mod ors;
pub mod types;

pub use ors::{OrsDirectionsProvider, ORS_BASE_URL};
