//! Debounce core: generation-tracked propagation of a fast-changing value.
//!
//! The timing source lives with the caller (the browser timer in the UI
//! layer, nothing at all in tests): `submit` records a new value and hands
//! back a ticket, the caller waits the debounce interval, then offers the
//! ticket to `settle`. Only the newest ticket settles, and only once, so a
//! burst of keystrokes propagates exactly its final value. Each debounced
//! field owns its own instance; generations are never shared across fields.

/// Claim ticket for one submitted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebouncedInput<T> {
    pending: Option<T>,
    generation: u64,
}

impl<T> Default for DebouncedInput<T> {
    fn default() -> Self {
        Self {
            pending: None,
            generation: 0,
        }
    }
}

impl<T> DebouncedInput<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new value. Any ticket handed out earlier is invalidated,
    /// even if the new value equals a previously submitted one.
    pub fn submit(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket {
            generation: self.generation,
        }
    }

    /// Offers a ticket whose wait has elapsed. Returns the value to propagate
    /// if the ticket is still the newest one, `None` otherwise.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.generation != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Teardown: outstanding tickets will never settle.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_final_value_of_a_burst_settles_exactly_once() {
        let mut input = DebouncedInput::new();
        let t1 = input.submit("e");
        let t2 = input.submit("ex");
        let t3 = input.submit("exa");
        assert_eq!(input.settle(t1), None);
        assert_eq!(input.settle(t2), None);
        assert_eq!(input.settle(t3), Some("exa"));
        // the winning ticket cannot settle twice
        assert_eq!(input.settle(t3), None);
    }

    #[test]
    fn resubmitting_an_identical_value_still_resets_the_timer() {
        let mut input = DebouncedInput::new();
        let t1 = input.submit("a");
        let t2 = input.submit("b");
        let t3 = input.submit("a");
        assert_eq!(input.settle(t1), None);
        assert_eq!(input.settle(t2), None);
        assert_eq!(input.settle(t3), Some("a"));
    }

    #[test]
    fn cancel_invalidates_outstanding_tickets() {
        let mut input = DebouncedInput::new();
        let ticket = input.submit("typed");
        input.cancel();
        assert_eq!(input.settle(ticket), None);
    }

    #[test]
    fn instances_are_independent() {
        let mut query = DebouncedInput::new();
        let mut url = DebouncedInput::new();
        let tq = query.submit("q");
        let tu = url.submit("u");
        assert_eq!(url.settle(tu), Some("u"));
        assert_eq!(query.settle(tq), Some("q"));
    }
}
