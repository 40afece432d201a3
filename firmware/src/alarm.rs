// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Operator confirmation for counting anomalies.
//!
//! Beeps, lights the alarm LED and blocks until the operator presses OK (keep counting) or BACK
//! (stop). Triggers arriving meanwhile coalesce in the dispatcher mailbox.

use cortex_m::delay::Delay;
use embedded_hal::digital::v2::OutputPin;
use log::warn;

use tapecount::{AlarmAck, Anomaly, AnomalyHandler, Session};

use crate::hw::{Buzzer, Key, Keys, Led};
use crate::LOOP_TICK_US;

const BEEP_COUNT: u8 = 3;
const BEEP_ON_MS: u32 = 200;
const BEEP_OFF_MS: u32 = 100;

pub struct OperatorAlarm<'a, B: OutputPin, L: OutputPin> {
    pub buzzer: &'a mut Buzzer<B>,
    pub led: &'a mut Led<L>,
    pub keys: &'a mut Keys,
    pub delay: &'a mut Delay,
}

impl<B: OutputPin, L: OutputPin> AnomalyHandler for OperatorAlarm<'_, B, L> {
    fn on_anomaly(&mut self, anomaly: Anomaly, session: &Session) -> AlarmAck {
        match anomaly {
            Anomaly::MissingChip { middle_loss_count } => {
                warn!("chip missing, LOSS:{}", middle_loss_count)
            }
            Anomaly::ExtraChip { edge_extra_count } => {
                warn!(
                    "extra chip in {} zone, ADD:{}",
                    session.stage().label(),
                    edge_extra_count
                )
            }
        }

        self.led.set(true);
        self.buzzer
            .beep(self.delay, BEEP_COUNT, BEEP_ON_MS, BEEP_OFF_MS);
        warn!("OK: continue  BACK: stop");

        let ack = loop {
            match self.keys.poll() {
                Some(Key::Ok) => break AlarmAck::Continue,
                Some(Key::Back) => break AlarmAck::Stop,
                None => self.delay.delay_us(LOOP_TICK_US),
            }
        };
        self.led.set(false);
        ack
    }
}
