// session.rs - Pagination Session State Machine
// Holds the current page of one paginated reply and applies navigation events to it.
// Knows nothing about Discord; menu.rs feeds it events one at a time and renders
// whatever page it ends up on.

use log::debug;

use crate::error::MetaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active(usize),
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    /// Zero-based target page
    Jump(usize),
    Close,
    Timeout,
}

#[derive(Debug)]
pub struct PaginationSession {
    page_count: usize,
    state: SessionState,
    last_shown: usize,
    owner: u64,
    allow_any_user: bool,
}

impl PaginationSession {
    pub fn new(page_count: usize, owner: u64, allow_any_user: bool) -> Result<Self, MetaError> {
        if page_count == 0 {
            return Err(MetaError::EmptyPages);
        }
        Ok(Self {
            page_count,
            state: SessionState::Active(0),
            last_shown: 0,
            owner,
            allow_any_user,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    /// Index of the page on display. A closed session keeps reporting the last
    /// page it showed.
    pub fn current_index(&self) -> usize {
        match self.state {
            SessionState::Active(index) => index,
            SessionState::Closed => self.last_shown,
        }
    }

    pub fn last_index(&self) -> usize {
        self.page_count - 1
    }

    /// 1-indexed (page, count) for display
    pub fn position(&self) -> (usize, usize) {
        (self.current_index() + 1, self.page_count)
    }

    pub fn can_drive(&self, actor: u64) -> bool {
        self.allow_any_user || actor == self.owner
    }

    /// Apply one navigation event from `actor`.
    ///
    /// Timeouts come from the driver itself and skip the ownership check. Rejected
    /// events leave the state untouched.
    pub fn apply(&mut self, actor: u64, event: Navigation) -> Result<SessionState, MetaError> {
        let index = match self.state {
            SessionState::Active(index) => index,
            SessionState::Closed => return Err(MetaError::StaleSessionEvent),
        };

        if event != Navigation::Timeout && !self.can_drive(actor) {
            return Err(MetaError::NotSessionOwner);
        }

        let next = match event {
            Navigation::Next => SessionState::Active((index + 1).min(self.last_index())),
            Navigation::Previous => SessionState::Active(index.saturating_sub(1)),
            Navigation::Jump(target) => {
                if target >= self.page_count {
                    return Err(MetaError::PageOutOfRange {
                        requested: target + 1,
                        count: self.page_count,
                    });
                }
                SessionState::Active(target)
            }
            Navigation::Close | Navigation::Timeout => SessionState::Closed,
        };

        debug!("[MENU] {:?}: {:?} -> {:?}", event, self.state, next);
        self.last_shown = match next {
            SessionState::Active(i) => i,
            SessionState::Closed => index,
        };
        self.state = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: u64 = 42;
    const STRANGER: u64 = 7;

    #[test]
    fn test_session_starts_on_first_page() {
        let session = PaginationSession::new(3, OWNER, false).unwrap();
        assert_eq!(session.state(), SessionState::Active(0));
        assert_eq!(session.position(), (1, 3));
    }

    #[test]
    fn test_empty_session_is_rejected() {
        assert!(matches!(PaginationSession::new(0, OWNER, false), Err(MetaError::EmptyPages)));
    }

    #[test]
    fn test_next_saturates_at_last_page() {
        let mut session = PaginationSession::new(4, OWNER, false).unwrap();
        for _ in 0..10 {
            session.apply(OWNER, Navigation::Next).unwrap();
            assert!(session.current_index() <= 3);
        }
        assert_eq!(session.current_index(), 3);
    }

    #[test]
    fn test_previous_saturates_at_zero() {
        let mut session = PaginationSession::new(4, OWNER, false).unwrap();
        session.apply(OWNER, Navigation::Next).unwrap();
        for _ in 0..5 {
            session.apply(OWNER, Navigation::Previous).unwrap();
        }
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_single_page_session_stays_put() {
        let mut session = PaginationSession::new(1, OWNER, false).unwrap();
        session.apply(OWNER, Navigation::Next).unwrap();
        session.apply(OWNER, Navigation::Previous).unwrap();
        assert_eq!(session.state(), SessionState::Active(0));
    }

    #[test]
    fn test_jump_out_of_range_keeps_state() {
        let mut session = PaginationSession::new(3, OWNER, false).unwrap();
        session.apply(OWNER, Navigation::Jump(1)).unwrap();
        let err = session.apply(OWNER, Navigation::Jump(3)).unwrap_err();
        assert!(matches!(err, MetaError::PageOutOfRange { requested: 4, count: 3 }));
        assert_eq!(session.current_index(), 1);

        session.apply(OWNER, Navigation::Jump(2)).unwrap();
        assert_eq!(session.position(), (3, 3));
    }

    #[test]
    fn test_events_after_close_are_stale() {
        let mut session = PaginationSession::new(3, OWNER, false).unwrap();
        session.apply(OWNER, Navigation::Next).unwrap();
        session.apply(OWNER, Navigation::Close).unwrap();
        assert!(session.is_closed());

        for event in [Navigation::Next, Navigation::Previous, Navigation::Jump(0), Navigation::Close] {
            assert!(matches!(session.apply(OWNER, event), Err(MetaError::StaleSessionEvent)));
            assert_eq!(session.current_index(), 1);
        }
    }

    #[test]
    fn test_timeout_closes_without_owner() {
        let mut session = PaginationSession::new(2, OWNER, false).unwrap();
        assert_eq!(session.apply(0, Navigation::Timeout).unwrap(), SessionState::Closed);
        assert!(matches!(session.apply(OWNER, Navigation::Next), Err(MetaError::StaleSessionEvent)));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_only_owner_drives_by_default() {
        let mut session = PaginationSession::new(3, OWNER, false).unwrap();
        assert!(matches!(session.apply(STRANGER, Navigation::Next), Err(MetaError::NotSessionOwner)));
        assert!(matches!(session.apply(STRANGER, Navigation::Close), Err(MetaError::NotSessionOwner)));
        assert_eq!(session.state(), SessionState::Active(0));
    }

    #[test]
    fn test_any_user_flag_widens_control() {
        let mut session = PaginationSession::new(3, OWNER, true).unwrap();
        session.apply(STRANGER, Navigation::Next).unwrap();
        assert_eq!(session.current_index(), 1);
    }
}
