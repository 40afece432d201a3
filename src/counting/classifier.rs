// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tape-stage classifier.
//!
//! Three-state machine over accepted chip samples:
//!
//! ```text
//!   LeadEmpty --(chip run > front threshold)--> Middle --(gap run == loss max + 1)--> TrailEmpty
//! ```
//!
//! A short chip run in the lead zone is noise and is booked as extra chips when a gap breaks it.
//! A long chip run is booked retroactively as the first middle-zone chips. Likewise, the gap run
//! that ends the middle zone is first counted as losses and then moved over to the trail zone.
//! The trail zone is terminal: a stray chip raises an alarm but the stage stays put.

use log::{debug, info};

use crate::alarm::{self, AlarmAck, Anomaly, AnomalyHandler};
use crate::config::Thresholds;
use crate::counting::session::{Session, Stage};
use crate::counting::yield_rate;

/// What one accepted sample did to the session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleOutcome {
    /// New stage, if the sample caused a transition.
    pub entered: Option<Stage>,
    /// Operator answer, if the sample raised an anomaly.
    pub ack: Option<AlarmAck>,
}

/// Feed one sample into the classifier.
///
/// Returns `None` without touching the session when it is paused.
pub fn process_sample<H>(
    session: &mut Session,
    thresholds: &Thresholds,
    chip_present: bool,
    alarms: &mut H,
) -> Option<SampleOutcome>
where
    H: AnomalyHandler + ?Sized,
{
    if !session.active {
        return None;
    }

    let mut outcome = SampleOutcome::default();

    match session.stage {
        Stage::LeadEmpty => {
            if chip_present {
                session.chip_run = session.chip_run.wrapping_add(1);
                if session.chip_run > u32::from(thresholds.front_chip_threshold()) {
                    session.middle_chip_count = session.chip_run;
                    session.chip_run = 0;
                    outcome.entered = Some(enter(session, Stage::Middle));
                }
            } else {
                session.lead_empty_count = session.lead_empty_count.wrapping_add(1);
                if session.chip_run > 0 {
                    // Run never confirmed: these were strays, not the chip zone.
                    session.edge_extra_count =
                        session.edge_extra_count.wrapping_add(session.chip_run);
                    session.chip_run = 0;
                }
            }
        }

        Stage::Middle => {
            if chip_present {
                session.middle_chip_count = session.middle_chip_count.wrapping_add(1);
                session.empty_run = 0;
            } else {
                session.empty_run = session.empty_run.wrapping_add(1);
                session.middle_loss_count = session.middle_loss_count.wrapping_add(1);

                let run = thresholds.trail_entry_run();
                if session.empty_run == run {
                    // The whole gap run belongs to the trail zone, not to the losses.
                    session.middle_loss_count = session.middle_loss_count.wrapping_sub(run);
                    session.trail_empty_count = session.trail_empty_count.wrapping_add(run);
                    session.empty_run = 0;
                    outcome.entered = Some(enter(session, Stage::TrailEmpty));
                }
            }
        }

        Stage::TrailEmpty => {
            if chip_present {
                session.edge_extra_count = session.edge_extra_count.wrapping_add(1);
                let anomaly = Anomaly::ExtraChip {
                    edge_extra_count: session.edge_extra_count,
                };
                outcome.ack = Some(alarm::raise(session, alarms, anomaly));
                session.empty_run = 0;
            } else {
                session.trail_empty_count = session.trail_empty_count.wrapping_add(1);
                session.empty_run = session.empty_run.wrapping_add(1);
            }
        }
    }

    session.yield_rate = yield_rate::compute(session.middle_chip_count, session.middle_loss_count);
    session.data_valid = true;

    debug!(
        "sample chip={} stage={:?} F={} C={} LOSS={} T={} ADD={}",
        chip_present,
        session.stage,
        session.lead_empty_count,
        session.middle_chip_count,
        session.middle_loss_count,
        session.trail_empty_count,
        session.edge_extra_count,
    );

    Some(outcome)
}

fn enter(session: &mut Session, next: Stage) -> Stage {
    info!(
        "tape stage {:?} -> {:?} (chips {}, trail {})",
        session.stage, next, session.middle_chip_count, session.trail_empty_count
    );
    session.stage = next;
    next
}
