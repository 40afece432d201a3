// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the counting head on a Nucleo-F767ZI.
//!
//! | Signal | Pin | Notes |
//! | ------ | --- | ----- |
//! | Index-hole sensor | PA0 | EXTI0, rising edge |
//! | Chip-detect sensor | PA1 | High = chip in pocket |
//! | OK key | PC13 | User button |
//! | BACK key | PC6 | To ground, pull-up |
//! | Buzzer | PB8 | Active high |
//! | Status LED | PB7 | LD2 (blue) |
//! | Alarm LED | PB14 | LD3 (red) |
//! | Console | PD8 / PD9 | USART3 via ST-LINK |

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpioc, gpiod, Alternate, Floating, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};

pub struct BoardPins {
    pub leds: Leds,
    pub usart3: Usart3Pins,
    pub sensors: SensorPins,
    pub keys: KeyPins,
    pub buzzer: gpiob::PB8<Output<PushPull>>,
}

pub struct Leds {
    pub status: gpiob::PB7<Output<PushPull>>,
    pub alarm: gpiob::PB14<Output<PushPull>>,
}

pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// Read from the EXTI0 handler through the GPIOA input register; held here so nothing else
/// reconfigures them.
pub struct SensorPins {
    pub index_hole: gpioa::PA0<Input<Floating>>,
    pub chip_detect: gpioa::PA1<Input<Floating>>,
}

pub struct KeyPins {
    pub ok: gpioc::PC13<Input<Floating>>,
    pub back: gpioc::PC6<Input<PullUp>>,
}

impl BoardPins {
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpioc: pac::GPIOC, gpiod: pac::GPIOD) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();

        Self {
            leds: Leds {
                status: gpiob.pb7.into_push_pull_output(),
                alarm: gpiob.pb14.into_push_pull_output(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            sensors: SensorPins {
                index_hole: gpioa.pa0.into_floating_input(),
                chip_detect: gpioa.pa1.into_floating_input(),
            },

            keys: KeyPins {
                ok: gpioc.pc13.into_floating_input(),
                back: gpioc.pc6.into_pull_up_input(),
            },

            buzzer: gpiob.pb8.into_push_pull_output(),
        }
    }
}
