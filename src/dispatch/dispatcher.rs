// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Trigger event dispatcher.
//!
//! Lives in a `static` so the interrupt handler can reach it:
//!
//! ```ignore
//! static DISPATCHER: EventDispatcher = EventDispatcher::new();
//!
//! #[interrupt]
//! fn EXTI0() {
//!     DISPATCHER.on_trigger_callback(|| chip_detect_is_high());
//! }
//! ```
//!
//! The interrupt side only bumps the ordinal and latches one event. It cannot see the session,
//! so the controller mirrors `Session::active` into `armed` whenever it changes.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use super::mailbox::{Mailbox, TriggerEvent, ORDINAL_MASK};

pub struct EventDispatcher {
    ordinal: AtomicU32,
    armed: AtomicBool,
    coalesced: AtomicU32,
    mailbox: Mailbox,
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDispatcher {
    pub const fn new() -> Self {
        Self {
            ordinal: AtomicU32::new(0),
            armed: AtomicBool::new(false),
            coalesced: AtomicU32::new(0),
            mailbox: Mailbox::new(),
        }
    }

    /// Interrupt-context entry point, one call per trigger edge.
    ///
    /// Always advances the ordinal. When armed, reads the chip sensor through `read_chip_sample`
    /// and latches the event, replacing any event the loop has not taken yet.
    #[inline]
    pub fn on_trigger_callback<F>(&self, read_chip_sample: F)
    where
        F: FnOnce() -> bool,
    {
        let ordinal = self.ordinal.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        if !self.armed.load(Ordering::Acquire) {
            return;
        }

        let event = TriggerEvent {
            ordinal,
            chip_present: read_chip_sample(),
        };
        if self.mailbox.post(event) {
            self.coalesced.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Loop-context side: take the latched event, if any.
    ///
    /// The slot only carries the low 30 bits of the ordinal. The full value is rebuilt from the
    /// live counter, which can only be ahead of the latched one.
    #[inline]
    pub fn poll_and_take(&self) -> Option<TriggerEvent> {
        let mut event = self.mailbox.take()?;
        let now = self.ordinal.load(Ordering::Relaxed);
        let behind = now.wrapping_sub(event.ordinal) & ORDINAL_MASK;
        event.ordinal = now.wrapping_sub(behind);
        Some(event)
    }

    /// Triggers seen since the last reset, armed or not.
    #[inline]
    pub fn ordinal(&self) -> u32 {
        self.ordinal.load(Ordering::Relaxed)
    }

    /// Events overwritten before the loop could take them.
    #[inline]
    pub fn coalesced(&self) -> u32 {
        self.coalesced.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    /// Mirror of `Session::active`. Only the session controller should call this.
    #[inline]
    pub(crate) fn set_armed(&self, armed: bool) {
        self.armed.store(armed, Ordering::Release);
    }

    /// Zero the ordinal and the coalesced count and drop any pending event.
    pub(crate) fn reset(&self) {
        self.armed.store(false, Ordering::Release);
        self.ordinal.store(0, Ordering::Relaxed);
        self.coalesced.store(0, Ordering::Relaxed);
        self.mailbox.clear();
    }
}
