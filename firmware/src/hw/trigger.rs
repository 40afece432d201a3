// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Index-hole trigger: EXTI0 on PA0, rising edge.
//!
//! The HAL has no EXTI helper for this part, so line routing and masking are done on the PAC
//! registers directly.
//!
//! Edges within [`LOCKOUT_MS`] of the last accepted one are bounce from the same hole and are
//! dropped before they reach the dispatcher. Timing uses the DWT cycle counter, which must be
//! running before [`enable`].

use cortex_m::peripheral::{DWT, NVIC};
use stm32f7xx_hal::pac::{self, interrupt};
use tapecount::EdgeLockout;

use crate::DISPATCHER;

/// Minimum spacing between two index holes.
pub const LOCKOUT_MS: u32 = 30;

static LOCKOUT: EdgeLockout = EdgeLockout::new();

/// Route PA0 to EXTI line 0, trigger on rising edges and unmask the interrupt.
///
/// `sysclk_hz` sets the lockout window in DWT cycles.
pub fn enable(exti: &pac::EXTI, syscfg: &pac::SYSCFG, sysclk_hz: u32) {
    LOCKOUT.set_window(sysclk_hz / 1_000 * LOCKOUT_MS);

    let rcc = unsafe { &*pac::RCC::ptr() };
    rcc.apb2enr.modify(|_, w| w.syscfgen().set_bit());

    // EXTICR1.EXTI0 = 0b0000 selects port A.
    syscfg.exticr1.modify(|_, w| unsafe { w.exti0().bits(0) });
    exti.rtsr.modify(|_, w| w.tr0().set_bit());
    exti.ftsr.modify(|_, w| w.tr0().clear_bit());
    exti.pr.write(|w| w.pr0().set_bit());
    exti.imr.modify(|_, w| w.mr0().set_bit());

    unsafe { NVIC::unmask(pac::Interrupt::EXTI0) };
}

#[interrupt]
fn EXTI0() {
    let exti = unsafe { &*pac::EXTI::ptr() };
    if exti.pr.read().pr0().bit_is_clear() {
        return;
    }
    exti.pr.write(|w| w.pr0().set_bit());

    let gpioa = unsafe { &*pac::GPIOA::ptr() };
    // Glitch filter: the hole must still be open when we get here.
    if gpioa.idr.read().idr0().bit_is_clear() {
        return;
    }
    if !LOCKOUT.accept(DWT::cycle_count()) {
        return;
    }
    DISPATCHER.on_trigger_callback(|| gpioa.idr.read().idr1().bit_is_set());
}
