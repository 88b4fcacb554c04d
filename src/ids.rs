//! Identity counter for action sheets

use std::sync::atomic::{AtomicI64, Ordering};

static SHARED: IdCounter = IdCounter::new();

/// Monotonic id source. The first id handed out is 0.
#[derive(Debug)]
pub struct IdCounter {
    last: AtomicI64,
}

impl IdCounter {
    /// A fresh counter.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_after(-1)
    }

    /// A counter whose next id is `last + 1`.
    #[must_use]
    pub const fn starting_after(last: i64) -> Self {
        Self {
            last: AtomicI64::new(last),
        }
    }

    /// The process-wide counter used when no other is supplied.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Take the next id.
    pub fn next_id(&self) -> i64 {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Accessibility id of the title element.
#[must_use]
pub fn header_id(id: i64) -> String {
    format!("acst-hdr-{id}")
}

/// Accessibility id of the subtitle element.
#[must_use]
pub fn sub_header_id(id: i64) -> String {
    format!("acst-subhdr-{id}")
}
