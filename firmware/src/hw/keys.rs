// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Operator keys with polled debounce.
//!
//! `OK` is the Nucleo user button (PC13, active high, external pull-down). `BACK` is a panel
//! switch to ground on PC6 with the internal pull-up.

use stm32f7xx_hal::gpio::{gpioc, Floating, Input, PullUp};

/// Consecutive identical reads before a level change is accepted. At the main-loop tick of
/// 250 us this is 10 ms.
const DEBOUNCE_READS: u8 = 40;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Key {
    Ok,
    Back,
}

struct Debounced {
    stable: bool,
    count: u8,
}

impl Debounced {
    const fn new() -> Self {
        Self {
            stable: false,
            count: 0,
        }
    }

    /// Feed one raw read; returns `true` on an accepted released-to-pressed edge.
    fn update(&mut self, pressed: bool) -> bool {
        if pressed == self.stable {
            self.count = 0;
            return false;
        }
        self.count += 1;
        if self.count < DEBOUNCE_READS {
            return false;
        }
        self.count = 0;
        self.stable = pressed;
        pressed
    }
}

pub struct Keys {
    ok: gpioc::PC13<Input<Floating>>,
    back: gpioc::PC6<Input<PullUp>>,
    ok_state: Debounced,
    back_state: Debounced,
}

impl Keys {
    pub fn new(ok: gpioc::PC13<Input<Floating>>, back: gpioc::PC6<Input<PullUp>>) -> Self {
        Self {
            ok,
            back,
            ok_state: Debounced::new(),
            back_state: Debounced::new(),
        }
    }

    /// Sample both keys once. Call at a fixed tick.
    pub fn poll(&mut self) -> Option<Key> {
        let ok = self.ok_state.update(self.ok.is_high());
        let back = self.back_state.update(self.back.is_low());
        if back {
            Some(Key::Back)
        } else if ok {
            Some(Key::Ok)
        } else {
            None
        }
    }
}
