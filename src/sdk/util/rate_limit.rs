use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// ORS free-tier directions quota.
pub const DEFAULT_DIRECTIONS_PER_MINUTE: NonZeroU32 = match NonZeroU32::new(40) {
    Some(n) => n,
    None => panic!("quota must be non-zero"),
};

pub fn directions_limiter(per_minute: NonZeroU32) -> Limiter {
    Arc::new(RateLimiter::direct(Quota::per_minute(per_minute)))
}
