use std::sync::atomic::{AtomicU64, Ordering};

/// Generation counter owned by one map view.
///
/// Every resolution started for the view takes a ticket; closing the view
/// (or opening a different listing) bumps the generation, after which
/// results carrying an older ticket are dropped instead of rendered.
#[derive(Debug, Default)]
pub struct RouteTracker {
    generation: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTicket(u64);

impl RouteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new resolution. Tickets handed out earlier become stale.
    pub fn begin(&self) -> RouteTicket {
        RouteTicket(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Invalidates every outstanding ticket.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    pub fn is_current(&self, ticket: RouteTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.0
    }
}
