// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Anomaly signals.
//!
//! The classifier raises an anomaly synchronously from the processing loop. The handler usually
//! beeps and then waits for the operator, so [`AnomalyHandler::on_anomaly`] is allowed to block;
//! counting resumes only after it returns an [`AlarmAck`].

use log::warn;

use crate::counting::Session;

/// Something the operator has to look at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Anomaly {
    /// Gaps inside the chip zone. Handlers must support it, but the classifier currently has no
    /// path that raises it.
    MissingChip { middle_loss_count: u32 },
    /// A chip turned up where the tape should be empty.
    ExtraChip { edge_extra_count: u32 },
}

/// Operator decision returned by an [`AnomalyHandler`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AlarmAck {
    /// Confirmed, keep counting.
    Continue,
    /// Cancelled, stop counting and leave the live view.
    Stop,
}

/// Receiver of anomaly signals.
pub trait AnomalyHandler {
    /// Handle `anomaly`. May block the processing loop, e.g. until a key is pressed.
    ///
    /// `session` already includes the count that triggered the anomaly.
    fn on_anomaly(&mut self, anomaly: Anomaly, session: &Session) -> AlarmAck;
}

impl<F> AnomalyHandler for F
where
    F: FnMut(Anomaly, &Session) -> AlarmAck,
{
    fn on_anomaly(&mut self, anomaly: Anomaly, session: &Session) -> AlarmAck {
        self(anomaly, session)
    }
}

/// Handler that logs and keeps counting. Handy for headless runs.
#[derive(Copy, Clone, Debug, Default)]
pub struct AutoContinue;

impl AnomalyHandler for AutoContinue {
    fn on_anomaly(&mut self, anomaly: Anomaly, _session: &Session) -> AlarmAck {
        warn!("anomaly {:?} auto-acknowledged", anomaly);
        AlarmAck::Continue
    }
}

/// Raise `anomaly` on `handler` and apply the answer to `session.active`.
///
/// The session is marked active before the handler runs, whatever the handler later decides.
/// Existing operator workflows rely on that ordering.
pub fn raise<H>(session: &mut Session, handler: &mut H, anomaly: Anomaly) -> AlarmAck
where
    H: AnomalyHandler + ?Sized,
{
    warn!("anomaly: {:?}", anomaly);
    session.active = true;

    let ack = handler.on_anomaly(anomaly, session);
    session.active = match ack {
        AlarmAck::Continue => true,
        AlarmAck::Stop => false,
    };
    ack
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_observes_active_session() {
        let mut session = Session::new();
        let mut seen_active = None;
        let ack = raise(
            &mut session,
            &mut |_: Anomaly, s: &Session| {
                seen_active = Some(s.is_active());
                AlarmAck::Continue
            },
            Anomaly::ExtraChip {
                edge_extra_count: 1,
            },
        );
        assert_eq!(ack, AlarmAck::Continue);
        assert_eq!(seen_active, Some(true));
        assert!(session.is_active());
    }

    #[test]
    fn stop_pauses_the_session() {
        let mut session = Session::new();
        session.active = true;
        let ack = raise(
            &mut session,
            &mut |_: Anomaly, _: &Session| AlarmAck::Stop,
            Anomaly::MissingChip {
                middle_loss_count: 2,
            },
        );
        assert_eq!(ack, AlarmAck::Stop);
        assert!(!session.is_active());
    }

    #[test]
    fn auto_continue_keeps_counting() {
        let mut session = Session::new();
        let ack = raise(
            &mut session,
            &mut AutoContinue,
            Anomaly::ExtraChip {
                edge_extra_count: 3,
            },
        );
        assert_eq!(ack, AlarmAck::Continue);
        assert!(session.is_active());
    }
}
