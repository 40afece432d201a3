// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Session controller.
//!
//! Owns the [`Session`], the thresholds and the carrier selection, and runs one step of the
//! processing loop per [`SessionController::poll`] call.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut counter = SessionController::new(&DISPATCHER);
//! counter.resume();
//!
//! loop {
//!     counter.poll(&mut alarms);
//!     if counter.take_refresh_request() {
//!         break;
//!     }
//! }
//! ```

use log::{debug, info};

use crate::alarm::{AlarmAck, AnomalyHandler};
use crate::carrier::{should_evaluate, CarrierProfile};
use crate::config::Thresholds;
use crate::counting::{classifier, SampleOutcome, Session, SessionSnapshot};
use crate::dispatch::{EventDispatcher, TriggerEvent};

/// Result of one [`SessionController::poll`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Poll {
    /// No trigger latched since the last poll.
    Idle,
    /// Trigger landed between pockets for the selected carrier.
    Skipped(TriggerEvent),
    /// Trigger latched just before a pause.
    Dropped(TriggerEvent),
    /// Sample went through the classifier.
    Accepted(TriggerEvent, SampleOutcome),
}

pub struct SessionController<'d> {
    session: Session,
    thresholds: Thresholds,
    profile: CarrierProfile,
    dispatcher: &'d EventDispatcher,

    /// Set when the operator stops counting from an alarm; the live view should exit.
    refresh_requested: bool,
}

impl<'d> SessionController<'d> {
    /// Create a controller with default thresholds and carrier, reset and paused.
    pub fn new(dispatcher: &'d EventDispatcher) -> Self {
        let mut controller = Self {
            session: Session::new(),
            thresholds: Thresholds::default(),
            profile: CarrierProfile::default(),
            dispatcher,
            refresh_requested: false,
        };
        controller.reset();
        controller
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_carrier_profile(mut self, profile: CarrierProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Clear all counts and the trigger ordinal, rewind to the lead zone and pause.
    ///
    /// Thresholds and carrier selection are kept.
    pub fn reset(&mut self) {
        self.session.clear();
        self.dispatcher.reset();
        self.refresh_requested = false;
        info!("session reset");
    }

    /// Start or continue counting.
    pub fn resume(&mut self) {
        self.set_active(true);
        info!("counting resumed");
    }

    /// Stop counting; counts are kept.
    pub fn pause(&mut self) {
        self.set_active(false);
        info!("counting paused");
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    fn set_active(&mut self, active: bool) {
        self.session.active = active;
        self.dispatcher.set_armed(active);
    }

    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot(self.dispatcher.ordinal())
    }

    #[inline]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Thresholds are live: changes apply from the next accepted sample.
    #[inline]
    pub fn thresholds_mut(&mut self) -> &mut Thresholds {
        &mut self.thresholds
    }

    #[inline]
    pub fn carrier_profile(&self) -> CarrierProfile {
        self.profile
    }

    pub fn set_carrier_profile(&mut self, profile: CarrierProfile) {
        if profile != self.profile {
            info!("carrier profile: {}", profile.name());
        }
        self.profile = profile;
    }

    /// Returns `true` once after an alarm was answered with [`AlarmAck::Stop`].
    pub fn take_refresh_request(&mut self) -> bool {
        core::mem::take(&mut self.refresh_requested)
    }

    /// Run one step of the processing loop.
    ///
    /// Takes the latched trigger, if any, gates it through the sampling policy and feeds it to
    /// the classifier. Blocks for as long as `alarms` blocks.
    pub fn poll<H>(&mut self, alarms: &mut H) -> Poll
    where
        H: AnomalyHandler + ?Sized,
    {
        let Some(event) = self.dispatcher.poll_and_take() else {
            return Poll::Idle;
        };

        if !should_evaluate(self.profile, event.ordinal) {
            debug!("trigger {} skipped ({})", event.ordinal, self.profile.name());
            return Poll::Skipped(event);
        }

        let Some(outcome) = classifier::process_sample(
            &mut self.session,
            &self.thresholds,
            event.chip_present,
            alarms,
        ) else {
            return Poll::Dropped(event);
        };

        if let Some(ack) = outcome.ack {
            self.dispatcher.set_armed(self.session.active);
            if ack == AlarmAck::Stop {
                info!("alarm stopped counting");
                self.refresh_requested = true;
            }
        }

        Poll::Accepted(event, outcome)
    }
}
