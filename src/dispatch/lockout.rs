// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Re-trigger lockout for a bouncing edge source.
//!
//! A single index hole can produce several rising edges as the sensor settles. Each extra edge
//! would advance the trigger ordinal and throw off the odd/even pocket phase, so edges that
//! arrive within a fixed window of the last accepted one are ignored. The check runs in the
//! interrupt handler and never waits.
//!
//! Timestamps are free-running tick counts (e.g. the DWT cycle counter). Elapsed time is taken
//! with wrapping subtraction, so the counter may roll over between edges.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

pub struct EdgeLockout {
    window: AtomicU32,
    last: AtomicU32,
    seen: AtomicBool,
}

impl Default for EdgeLockout {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeLockout {
    /// A lockout with a zero window accepts every edge until [`set_window`](Self::set_window).
    pub const fn new() -> Self {
        Self {
            window: AtomicU32::new(0),
            last: AtomicU32::new(0),
            seen: AtomicBool::new(false),
        }
    }

    /// Window length in ticks.
    pub fn set_window(&self, ticks: u32) {
        self.window.store(ticks, Ordering::Relaxed);
    }

    #[inline]
    pub fn window(&self) -> u32 {
        self.window.load(Ordering::Relaxed)
    }

    /// Decide on an edge seen at `now`. Accepted edges restart the window; rejected ones do not.
    ///
    /// Single caller only (the edge interrupt).
    #[inline]
    pub fn accept(&self, now: u32) -> bool {
        if self.seen.load(Ordering::Relaxed)
            && now.wrapping_sub(self.last.load(Ordering::Relaxed)) < self.window()
        {
            return false;
        }
        self.last.store(now, Ordering::Relaxed);
        self.seen.store(true, Ordering::Relaxed);
        true
    }
}
