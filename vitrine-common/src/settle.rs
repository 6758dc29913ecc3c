/// Identifies one armed settle period.
///
/// Every programmatic navigation arms a fresh token. The timer that fires
/// afterwards hands the token back, and only the most recent one releases
/// the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettleToken(u64);

impl SettleToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Suppresses scroll-driven page sync while a programmatic scroll animates.
#[derive(Debug, Default)]
pub struct SettleGuard {
    pending: Option<SettleToken>,
    next_id: u64,
}

impl SettleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the guard, superseding any pending token.
    pub fn arm(&mut self) -> SettleToken {
        let token = SettleToken(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some(token);
        token
    }

    /// Release the guard if `token` is the one currently pending.
    /// Returns false for stale or unknown tokens.
    pub fn release(&mut self, token: SettleToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<SettleToken> {
        self.pending
    }
}
