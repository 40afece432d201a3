// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Single-slot, lock-free mailbox between the trigger interrupt and the main loop.
//!
//! One producer (the EXTI handler) and one consumer (the processing loop). Posting never blocks
//! and never fails: a second post before the consumer takes the first simply replaces it. The
//! whole event lives in one `AtomicU32`, so the consumer always sees a matching
//! ordinal/sample pair.
//!
//! Slot layout:
//!
//! | Bits | Field |
//! | ---- | ----- |
//! | 0 | pending |
//! | 1 | chip present |
//! | 2..=31 | trigger ordinal, low 30 bits |
//!
//! Requires native 32-bit atomic swap (Cortex-M3 and up).

use core::sync::atomic::{AtomicU32, Ordering};

const EMPTY: u32 = 0;
const PENDING_BIT: u32 = 1 << 0;
const CHIP_BIT: u32 = 1 << 1;
const ORDINAL_SHIFT: u32 = 2;

/// Mask applied to ordinals carried through the slot.
pub const ORDINAL_MASK: u32 = u32::MAX >> ORDINAL_SHIFT;

/// One latched trigger edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriggerEvent {
    /// Trigger count since the last reset. Events taken straight from a [`Mailbox`] carry it
    /// modulo 2^30; [`EventDispatcher`](super::EventDispatcher) restores the full value.
    pub ordinal: u32,
    /// Chip-detect level sampled inside the interrupt.
    pub chip_present: bool,
}

impl TriggerEvent {
    #[inline]
    fn encode(self) -> u32 {
        let chip = if self.chip_present { CHIP_BIT } else { 0 };
        ((self.ordinal & ORDINAL_MASK) << ORDINAL_SHIFT) | chip | PENDING_BIT
    }

    #[inline]
    fn decode(raw: u32) -> Option<Self> {
        if raw & PENDING_BIT == 0 {
            return None;
        }
        Some(Self {
            ordinal: raw >> ORDINAL_SHIFT,
            chip_present: raw & CHIP_BIT != 0,
        })
    }
}

/// Coalescing single-slot mailbox.
pub struct Mailbox {
    slot: AtomicU32,
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Mailbox {
    pub const fn new() -> Self {
        Self {
            slot: AtomicU32::new(EMPTY),
        }
    }

    /// Latch `event`. Returns `true` if an unconsumed event was overwritten.
    #[inline]
    pub fn post(&self, event: TriggerEvent) -> bool {
        self.slot.swap(event.encode(), Ordering::AcqRel) != EMPTY
    }

    /// Take the pending event, leaving the slot empty.
    #[inline]
    pub fn take(&self) -> Option<TriggerEvent> {
        TriggerEvent::decode(self.slot.swap(EMPTY, Ordering::AcqRel))
    }

    /// Whether an event is waiting.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.slot.load(Ordering::Acquire) & PENDING_BIT != 0
    }

    /// Drop any pending event.
    #[inline]
    pub fn clear(&self) {
        self.slot.store(EMPTY, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mailbox_yields_nothing() {
        let mb = Mailbox::new();
        assert!(!mb.is_pending());
        assert_eq!(mb.take(), None);
    }

    #[test]
    fn take_consumes_exactly_once() {
        let mb = Mailbox::new();
        let ev = TriggerEvent {
            ordinal: 7,
            chip_present: true,
        };
        assert!(!mb.post(ev));
        assert!(mb.is_pending());
        assert_eq!(mb.take(), Some(ev));
        assert_eq!(mb.take(), None);
    }

    #[test]
    fn second_post_overwrites_first() {
        let mb = Mailbox::new();
        mb.post(TriggerEvent {
            ordinal: 1,
            chip_present: true,
        });
        let overwritten = mb.post(TriggerEvent {
            ordinal: 2,
            chip_present: false,
        });
        assert!(overwritten);
        assert_eq!(
            mb.take(),
            Some(TriggerEvent {
                ordinal: 2,
                chip_present: false,
            })
        );
        assert_eq!(mb.take(), None);
    }

    #[test]
    fn ordinal_zero_with_no_chip_is_still_pending() {
        let mb = Mailbox::new();
        let ev = TriggerEvent {
            ordinal: 0,
            chip_present: false,
        };
        mb.post(ev);
        assert_eq!(mb.take(), Some(ev));
    }

    #[test]
    fn large_ordinals_keep_their_parity() {
        let mb = Mailbox::new();
        for ordinal in [ORDINAL_MASK, ORDINAL_MASK + 1, ORDINAL_MASK + 2, u32::MAX] {
            mb.post(TriggerEvent {
                ordinal,
                chip_present: true,
            });
            let got = mb.take().unwrap();
            assert_eq!(got.ordinal % 2, ordinal % 2);
            assert_eq!(got.ordinal, ordinal & ORDINAL_MASK);
        }
    }

    #[test]
    fn clear_discards_pending_event() {
        let mb = Mailbox::new();
        mb.post(TriggerEvent {
            ordinal: 3,
            chip_present: true,
        });
        mb.clear();
        assert_eq!(mb.take(), None);
    }
}
