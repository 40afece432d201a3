// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Counting session state.
//!
//! There is exactly one [`Session`] per device. It is mutated only by the classifier and cleared
//! only by the session controller; everyone else reads a [`SessionSnapshot`].

/// Zone of the tape currently passing the sensor. Only ever advances.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    #[default]
    LeadEmpty,
    Middle,
    TrailEmpty,
}

impl Stage {
    /// Short label used on the live counting screen.
    pub fn label(self) -> &'static str {
        match self {
            Stage::LeadEmpty => "Lead",
            Stage::Middle => "Chips",
            Stage::TrailEmpty => "Tail",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub(crate) stage: Stage,

    /// Consecutive chips seen while still in the lead zone
    pub(crate) chip_run: u32,
    /// Consecutive gaps seen in the middle or trail zone
    pub(crate) empty_run: u32,

    pub(crate) lead_empty_count: u32,
    pub(crate) middle_chip_count: u32,
    pub(crate) trail_empty_count: u32,

    /// Gaps inside the chip zone. Alarm statistic, cleared only by reset.
    pub(crate) middle_loss_count: u32,
    /// Chips found in the lead or trail zone. Alarm statistic, cleared only by reset.
    pub(crate) edge_extra_count: u32,

    /// Percent of middle-zone pockets found populated
    pub(crate) yield_rate: f32,

    pub(crate) active: bool,
    pub(crate) data_valid: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A cleared, paused session.
    pub const fn new() -> Self {
        Self {
            stage: Stage::LeadEmpty,
            chip_run: 0,
            empty_run: 0,
            lead_empty_count: 0,
            middle_chip_count: 0,
            trail_empty_count: 0,
            middle_loss_count: 0,
            edge_extra_count: 0,
            yield_rate: 0.0,
            active: false,
            data_valid: false,
        }
    }

    /// Zero every counter, rewind to the lead zone, pause, and invalidate the data.
    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[inline]
    pub fn chip_run(&self) -> u32 {
        self.chip_run
    }

    #[inline]
    pub fn empty_run(&self) -> u32 {
        self.empty_run
    }

    #[inline]
    pub fn lead_empty_count(&self) -> u32 {
        self.lead_empty_count
    }

    #[inline]
    pub fn middle_chip_count(&self) -> u32 {
        self.middle_chip_count
    }

    #[inline]
    pub fn trail_empty_count(&self) -> u32 {
        self.trail_empty_count
    }

    #[inline]
    pub fn middle_loss_count(&self) -> u32 {
        self.middle_loss_count
    }

    #[inline]
    pub fn edge_extra_count(&self) -> u32 {
        self.edge_extra_count
    }

    #[inline]
    pub fn yield_rate(&self) -> f32 {
        self.yield_rate
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn data_valid(&self) -> bool {
        self.data_valid
    }

    /// Copy out everything a display or reporter needs.
    ///
    /// `trigger_ordinal` comes from the dispatcher since the session never sees raw triggers.
    pub fn snapshot(&self, trigger_ordinal: u32) -> SessionSnapshot {
        SessionSnapshot {
            stage: self.stage,
            chip_run: self.chip_run,
            empty_run: self.empty_run,
            lead_empty_count: self.lead_empty_count,
            middle_chip_count: self.middle_chip_count,
            trail_empty_count: self.trail_empty_count,
            middle_loss_count: self.middle_loss_count,
            edge_extra_count: self.edge_extra_count,
            yield_rate: self.yield_rate,
            active: self.active,
            data_valid: self.data_valid,
            trigger_ordinal,
        }
    }
}

/// Read-only copy of a [`Session`] plus the trigger ordinal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub stage: Stage,
    pub chip_run: u32,
    pub empty_run: u32,
    pub lead_empty_count: u32,
    pub middle_chip_count: u32,
    pub trail_empty_count: u32,
    pub middle_loss_count: u32,
    pub edge_extra_count: u32,
    pub yield_rate: f32,
    pub active: bool,
    pub data_valid: bool,
    pub trigger_ordinal: u32,
}
