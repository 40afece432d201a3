// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `log` backend over the USART3 debug console.
//!
//! Records are written as `[LEVEL] message` lines. The port is checked out of its cell inside a
//! short critical section and written with interrupts enabled, so the trigger interrupt is never
//! masked for the length of a line. A record raised while the port is checked out is dropped.

use core::cell::RefCell;
use core::fmt::Write;

use cortex_m::interrupt::{self, Mutex};
use log::{LevelFilter, Metadata, Record};
use stm32f7xx_hal::pac::USART3;

use crate::hw::Usart;

struct UsartLogger {
    port: Mutex<RefCell<Option<Usart<USART3>>>>,
}

static LOGGER: UsartLogger = UsartLogger {
    port: Mutex::new(RefCell::new(None)),
};

/// Install the console logger. Records above `level` are discarded.
pub fn init(usart: Usart<USART3>, level: LevelFilter) {
    interrupt::free(|cs| *LOGGER.port.borrow(cs).borrow_mut() = Some(usart));
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

impl UsartLogger {
    fn checkout(&self) -> Option<Usart<USART3>> {
        interrupt::free(|cs| self.port.borrow(cs).take())
    }

    fn checkin(&self, port: Usart<USART3>) {
        interrupt::free(|cs| *self.port.borrow(cs).borrow_mut() = Some(port));
    }
}

impl log::Log for UsartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(mut port) = self.checkout() else {
            return;
        };
        let _ = writeln!(port, "[{:<5}] {}", record.level(), record.args());
        self.checkin(port);
    }

    fn flush(&self) {
        if let Some(mut port) = self.checkout() {
            port.flush();
            self.checkin(port);
        }
    }
}
