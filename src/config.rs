// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Classifier thresholds.
//!
//! All three values are editable at runtime from the operator menu and are not persisted. A
//! session reset clears counts but leaves the thresholds alone; only a restart restores the
//! defaults.

/// Default number of consecutive chips that must be *exceeded* to leave the lead-empty zone.
pub const FRONT_CHIP_THRESHOLD_DEFAULT: u8 = 3;
/// Default number of consecutive middle-zone gaps still counted as losses.
pub const MIDDLE_LOSS_MAX_DEFAULT: u8 = 2;
/// Default trail-empty run length.
pub const TRAIL_EMPTY_THRESHOLD_DEFAULT: u8 = 3;

/// Upper bound accepted by every setter (the menu editor is two digits wide).
pub const THRESHOLD_MAX: u8 = 99;

/// Tunable thresholds for the tape-stage classifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Thresholds {
    front_chip_threshold: u8,
    middle_loss_max: u8,
    /// Exposed to the operator but not consulted by the classifier. The middle to trail
    /// transition runs on `middle_loss_max + 1`.
    trail_empty_threshold: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new()
    }
}

impl Thresholds {
    /// Thresholds at their factory defaults.
    pub const fn new() -> Self {
        Self {
            front_chip_threshold: FRONT_CHIP_THRESHOLD_DEFAULT,
            middle_loss_max: MIDDLE_LOSS_MAX_DEFAULT,
            trail_empty_threshold: TRAIL_EMPTY_THRESHOLD_DEFAULT,
        }
    }

    /// Set the front chip threshold.
    pub fn with_front_chip_threshold(mut self, value: u8) -> Self {
        self.set_front_chip_threshold(value);
        self
    }

    /// Set the middle loss maximum.
    pub fn with_middle_loss_max(mut self, value: u8) -> Self {
        self.set_middle_loss_max(value);
        self
    }

    /// Set the trail empty threshold.
    pub fn with_trail_empty_threshold(mut self, value: u8) -> Self {
        self.set_trail_empty_threshold(value);
        self
    }

    #[inline]
    pub fn front_chip_threshold(&self) -> u8 {
        self.front_chip_threshold
    }

    #[inline]
    pub fn middle_loss_max(&self) -> u8 {
        self.middle_loss_max
    }

    #[inline]
    pub fn trail_empty_threshold(&self) -> u8 {
        self.trail_empty_threshold
    }

    /// Run length of consecutive gaps that ends the middle zone.
    #[inline]
    pub fn trail_entry_run(&self) -> u32 {
        u32::from(self.middle_loss_max) + 1
    }

    /// Store a new front chip threshold, clamped to [`THRESHOLD_MAX`]. Returns the stored value.
    pub fn set_front_chip_threshold(&mut self, value: u8) -> u8 {
        self.front_chip_threshold = value.min(THRESHOLD_MAX);
        self.front_chip_threshold
    }

    /// Store a new middle loss maximum, clamped to [`THRESHOLD_MAX`]. Returns the stored value.
    pub fn set_middle_loss_max(&mut self, value: u8) -> u8 {
        self.middle_loss_max = value.min(THRESHOLD_MAX);
        self.middle_loss_max
    }

    /// Store a new trail empty threshold, clamped to [`THRESHOLD_MAX`]. Returns the stored value.
    pub fn set_trail_empty_threshold(&mut self, value: u8) -> u8 {
        self.trail_empty_threshold = value.min(THRESHOLD_MAX);
        self.trail_empty_threshold
    }
}
