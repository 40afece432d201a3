// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Tape Counter Firmware
//!
//! Board bring-up for the counting head on a Nucleo-F767ZI. Index-hole edges arrive on EXTI0 and
//! are handed to the main loop through [`DISPATCHER`]; the loop runs the counting session, the
//! operator keys and the status LED.
//!
//! Keys outside an alarm:
//! - `OK` toggles pause / resume.
//! - `BACK` while paused prints the last result and resets the session.

#![no_main]
#![no_std]
#![allow(dead_code)]

use cortex_m::delay::Delay;
use cortex_m_rt::entry;
use log::{debug, info, LevelFilter};
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use tapecount::{CarrierProfile, EventDispatcher, Poll, SessionController};

mod alarm;
mod hw;
mod logger;

use alarm::OperatorAlarm;
use hw::{trigger, BoardPins, Buzzer, Key, Keys, Led, Usart};

/// Shared between the EXTI0 handler and the main loop.
pub static DISPATCHER: EventDispatcher = EventDispatcher::new();

/// Carrier loaded on this head. There is no on-device menu, so this is a build-time choice.
const CARRIER: CarrierProfile = CarrierProfile::Msop;

/// Main-loop and alarm-wait polling period.
pub const LOOP_TICK_US: u32 = 250;

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD);

    // USART3 console
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    logger::init(Usart::new(serial), LevelFilter::Info);

    // Cycle counter for the trigger lockout
    cp.DCB.enable_trace();
    cp.DWT.enable_cycle_counter();
    let sysclk_hz = clocks.sysclk().raw();

    // SysTick delay
    let mut delay = Delay::new(cp.SYST, sysclk_hz);

    let mut status = Led::active_high(pins.leds.status);
    let mut alarm_led = Led::active_high(pins.leds.alarm);
    let mut buzzer = Buzzer::new(pins.buzzer);
    let mut keys = Keys::new(pins.keys.ok, pins.keys.back);

    let mut counter = SessionController::new(&DISPATCHER).with_carrier_profile(CARRIER);
    trigger::enable(&dp.EXTI, &dp.SYSCFG, sysclk_hz);

    info!(
        "tape counter ready, carrier {}, press OK to start",
        counter.carrier_profile().name()
    );

    let mut coalesced = 0;
    loop {
        let mut operator = OperatorAlarm {
            buzzer: &mut buzzer,
            led: &mut alarm_led,
            keys: &mut keys,
            delay: &mut delay,
        };
        if let Poll::Accepted(..) = counter.poll(&mut operator) {
            info!("{}", counter.snapshot().live());
        }

        if counter.take_refresh_request() {
            info!("{}", counter.snapshot().last_result());
        }

        match keys.poll() {
            Some(Key::Ok) if counter.is_active() => counter.pause(),
            Some(Key::Ok) => counter.resume(),
            Some(Key::Back) if !counter.is_active() => {
                info!("{}", counter.snapshot().last_result());
                counter.reset();
            }
            _ => {}
        }

        status.set(counter.is_active());

        // Reset zeroes the dispatcher count, so only report growth.
        let lost = DISPATCHER.coalesced();
        if lost > coalesced {
            debug!("{} trigger(s) overwritten before processing", lost - coalesced);
        }
        coalesced = lost;

        delay.delay_us(LOOP_TICK_US);
    }
}
