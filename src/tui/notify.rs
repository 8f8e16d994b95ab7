//! Transient outcome notices.
//!
//! Each notice auto-expires after [`NOTICE_TTL`]; expired entries are pruned
//! on every tick so the stack never grows without bound. Esc clears the
//! stack early.

use std::time::{Duration, Instant};

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient banner.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    created: Instant,
}

/// Stack of active notices, newest last.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    fn push(&mut self, kind: NoticeKind, text: String) {
        self.items.push(Notice {
            kind,
            text,
            created: Instant::now(),
        });
    }

    /// Drops notices older than [`NOTICE_TTL`] relative to `now`.
    pub fn prune(&mut self, now: Instant) {
        self.items
            .retain(|n| now.duration_since(n.created) < NOTICE_TTL);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    /// Active notice texts, oldest first. Test and render helper.
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|n| n.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_stack_in_arrival_order() {
        let mut notices = Notices::new();
        notices.error("first");
        notices.success("second");
        assert_eq!(notices.texts(), vec!["first", "second"]);
    }

    #[test]
    fn prune_drops_only_expired_notices() {
        let mut notices = Notices::new();
        notices.error("old");
        // Backdate the first notice past its TTL.
        notices.items[0].created = Instant::now() - (NOTICE_TTL + Duration::from_millis(10));
        notices.success("fresh");

        notices.prune(Instant::now());
        assert_eq!(notices.texts(), vec!["fresh"]);
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut notices = Notices::new();
        notices.error("x");
        notices.clear();
        assert!(notices.is_empty());
    }
}
