//! Per-view fetch state, guarded by request tickets.
//!
//! Every fetch a view starts is stamped with a [`FetchTicket`]. When responses
//! overlap, only the one carrying the most recently issued ticket is applied;
//! anything older is dropped, so the latest request always wins regardless of
//! resolution order.

/// Lifecycle of one view's data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// The latest request succeeded; an empty payload is still `Loaded`.
    Loaded(T),
    /// The latest request failed; holds the user-facing message.
    Failed(String),
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Data of a successful fetch.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Message of a failed fetch.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Stamp identifying one issued fetch within a [`FetchSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// State holder for one view: current [`FetchState`] plus the latest ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSlot<T> {
    state: FetchState<T>,
    issued: u64,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Idle,
            issued: 0,
        }
    }
}

impl<T> FetchSlot<T> {
    #[must_use]
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Enter `Loading` and issue a fresh ticket, superseding any outstanding one.
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        self.state = FetchState::Loading;
        FetchTicket(self.issued)
    }

    /// Whether `ticket` belongs to the most recent fetch.
    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply a response. Returns `false` and changes nothing if `ticket` is stale.
    ///
    /// Success replaces the data and clears any error; failure clears the data.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<T, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = match result {
            Ok(data) => FetchState::Loaded(data),
            Err(message) => FetchState::Failed(message),
        };
        true
    }

    /// Fail without issuing a request, e.g. on invalid input.
    ///
    /// Outstanding tickets are invalidated so a late response cannot replace the
    /// error with data for inputs the user has since abandoned.
    pub fn reject(&mut self, message: String) {
        self.issued += 1;
        self.state = FetchState::Failed(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_idle() {
        let slot = FetchSlot::<u32>::default();
        assert_eq!(slot.state(), &FetchState::Idle);
    }

    #[test]
    fn should_move_through_loading_to_loaded() {
        let mut slot = FetchSlot::default();
        let ticket = slot.begin();
        assert!(slot.state().is_loading());
        assert!(slot.resolve(ticket, Ok(7)));
        assert_eq!(slot.state().data(), Some(&7));
        assert_eq!(slot.state().error(), None);
    }

    #[test]
    fn should_clear_data_on_failure() {
        let mut slot = FetchSlot::default();
        let first = slot.begin();
        slot.resolve(first, Ok(7));
        let second = slot.begin();
        assert!(slot.resolve(second, Err("boom".to_string())));
        assert_eq!(slot.state().data(), None);
        assert_eq!(slot.state().error(), Some("boom"));
    }

    #[test]
    fn should_clear_error_on_success() {
        let mut slot = FetchSlot::default();
        let first = slot.begin();
        slot.resolve(first, Err::<u32, _>("boom".to_string()));
        let second = slot.begin();
        slot.resolve(second, Ok(1));
        assert_eq!(slot.state(), &FetchState::Loaded(1));
    }

    #[test]
    fn should_discard_superseded_response_whatever_the_arrival_order() {
        let mut slot = FetchSlot::default();
        let old = slot.begin();
        let new = slot.begin();

        assert!(slot.resolve(new, Ok("new")));
        assert!(!slot.resolve(old, Ok("old")));
        assert_eq!(slot.state().data(), Some(&"new"));
    }

    #[test]
    fn should_keep_loading_when_only_stale_response_arrived() {
        let mut slot = FetchSlot::default();
        let old = slot.begin();
        let _new = slot.begin();
        assert!(!slot.resolve(old, Ok(1)));
        assert!(slot.state().is_loading());
    }

    #[test]
    fn should_invalidate_outstanding_ticket_on_reject() {
        let mut slot = FetchSlot::default();
        let ticket = slot.begin();
        slot.reject("Please enter both Land ID and Date".to_string());
        assert!(!slot.resolve(ticket, Ok(1)));
        assert_eq!(
            slot.state().error(),
            Some("Please enter both Land ID and Date")
        );
    }
}
