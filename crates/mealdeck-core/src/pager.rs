//! Incremental reveal of a filtered view, one page at a time.
//!
//! # Reveal cursor
//!
//! `revealed` (K) is the number of rows of the filtered view currently shown.
//! It starts at one page, grows by one page per fired reveal, and is always
//! `<= view_len`. It changes in exactly two ways: [`Paginator::reset`] (the
//! view changed) and a reveal fired by [`Paginator::poll`].
//!
//! # Deferred reveals
//!
//! "Load more" is deliberately delayed (a spinner shows meanwhile).
//! [`Paginator::request_more`] records a [`PendingReveal`] stamped with the
//! current `version`; every reset bumps the version, so a reveal requested
//! against an old view is discarded when it comes due instead of growing the
//! new one.

use std::time::{Duration, Instant};

/// Default page size.
pub const PAGE_SIZE: usize = 12;

/// A scheduled page reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReveal {
    pub version: u64,
    pub due: Instant,
}

/// What happened when a pending reveal was polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Nothing was due.
    Idle,
    /// The reveal fired; `revealed` is the new K.
    Revealed { revealed: usize },
    /// The reveal was for an older view and was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct Paginator {
    page_size: usize,
    delay: Duration,
    revealed: usize,
    version: u64,
    pending: Option<PendingReveal>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE, Duration::from_millis(500))
    }
}

impl Paginator {
    /// `page_size` is clamped to at least 1.
    pub fn new(page_size: usize, delay: Duration) -> Self {
        Self {
            page_size: page_size.max(1),
            delay,
            revealed: 0,
            version: 0,
            pending: None,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current K.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Identity of the view K currently refers to.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pending(&self) -> Option<PendingReveal> {
        self.pending
    }

    /// Start over on a new view of `view_len` rows.
    pub fn reset(&mut self, view_len: usize) {
        self.version += 1;
        self.revealed = self.page_size.min(view_len);
        tracing::debug!(
            version = self.version,
            revealed = self.revealed,
            view_len,
            "pager: reset"
        );
    }

    pub fn has_more(&self, view_len: usize) -> bool {
        self.revealed < view_len
    }

    /// True while a reveal for the current view is waiting to fire.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some_and(|p| p.version == self.version)
    }

    /// Schedule one more page. Returns `false` when nothing is left to show
    /// or a reveal for this view is already pending.
    pub fn request_more(&mut self, now: Instant, view_len: usize) -> bool {
        if !self.has_more(view_len) || self.is_loading() {
            return false;
        }
        let reveal = PendingReveal {
            version: self.version,
            due: now + self.delay,
        };
        tracing::debug!(version = reveal.version, "pager: reveal scheduled");
        self.pending = Some(reveal);
        true
    }

    /// Fire the pending reveal if it is due.
    pub fn poll(&mut self, now: Instant, view_len: usize) -> RevealOutcome {
        let Some(reveal) = self.pending else {
            return RevealOutcome::Idle;
        };
        if now < reveal.due {
            return RevealOutcome::Idle;
        }
        self.pending = None;
        if reveal.version != self.version {
            tracing::debug!(
                scheduled_for = reveal.version,
                current = self.version,
                "pager: stale reveal discarded"
            );
            return RevealOutcome::Stale;
        }
        self.revealed = (self.revealed + self.page_size).min(view_len);
        tracing::debug!(revealed = self.revealed, view_len, "pager: page revealed");
        RevealOutcome::Revealed {
            revealed: self.revealed,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
