// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! On/off output lines: status LED and buzzer.

use cortex_m::delay::Delay;
use embedded_hal::digital::v2::OutputPin;

/// Whether the line is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// LED abstraction that remembers its active level and last known state.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Create an LED wrapper, initializing it to OFF.
    pub fn new(mut pin: PIN, active: ActiveLevel) -> Self {
        match active {
            ActiveLevel::High => pin.set_low().ok(),
            ActiveLevel::Low => pin.set_high().ok(),
        };
        Self {
            pin,
            active,
            is_on: false,
        }
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// Drive the LED logically ON (true) or OFF (false). Skips the write if nothing changes.
    pub fn set(&mut self, on: bool) {
        if on == self.is_on {
            return;
        }
        match (self.active, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => self.pin.set_high().ok(),
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => self.pin.set_low().ok(),
        };
        self.is_on = on;
    }
}

/// Active-high piezo buzzer. Blocking only.
pub struct Buzzer<PIN: OutputPin> {
    line: Led<PIN>,
}

impl<PIN: OutputPin> Buzzer<PIN> {
    pub fn new(pin: PIN) -> Self {
        Self {
            line: Led::active_high(pin),
        }
    }

    /// Sound `count` beeps of `on_ms`, separated by `off_ms` of silence.
    pub fn beep(&mut self, delay: &mut Delay, count: u8, on_ms: u32, off_ms: u32) {
        for _ in 0..count {
            self.line.set(true);
            delay.delay_ms(on_ms);
            self.line.set(false);
            delay.delay_ms(off_ms);
        }
    }
}
