/// Ticket for one asynchronous image load against the preview surface.
///
/// Intentionally a small, copyable handle so completions can carry it
/// through the browser's callback scheduling without allocation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

/// Monotonic sequencing for image loads on a single preview surface.
///
/// Image decoding completes asynchronously and is never cancelled, so a
/// slow load can finish after a newer selection was already handled. Each
/// load takes a ticket; a completion may only draw while its ticket is
/// still the current one. Clearing the surface also advances the sequence
/// so an in-flight load cannot draw over an intentional clear.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    current: u64,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load, invalidating every ticket issued before it.
    pub fn begin(&mut self) -> LoadTicket {
        self.current += 1;
        LoadTicket(self.current)
    }

    /// Invalidates all outstanding tickets without starting a load.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ticket_is_current() {
        let mut seq = LoadSequencer::new();
        let ticket = seq.begin();
        assert!(seq.is_current(ticket));
    }

    #[test]
    fn newer_load_invalidates_older_ticket() {
        let mut seq = LoadSequencer::new();
        let slow = seq.begin();
        let fast = seq.begin();
        // The slow first load completes after the fast second one: the
        // stale completion must be discarded, not drawn.
        assert!(!seq.is_current(slow));
        assert!(seq.is_current(fast));
    }

    #[test]
    fn clear_invalidates_in_flight_loads() {
        let mut seq = LoadSequencer::new();
        let in_flight = seq.begin();
        seq.invalidate();
        assert!(!seq.is_current(in_flight));
    }

    #[test]
    fn tickets_never_repeat() {
        let mut seq = LoadSequencer::new();
        let a = seq.begin();
        seq.invalidate();
        let b = seq.begin();
        assert_ne!(a, b);
        assert!(a < b);
    }
}
