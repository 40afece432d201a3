// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Tape Counter Core
//!
//! This crate contains the chip-counting pipeline for the tape-and-reel inspection head: the
//! trigger handoff from the index-hole interrupt, the per-carrier sampling gate, the tape-stage
//! classifier and the yield calculation.
//!
//! Nothing here touches registers. The board firmware (see `firmware/`) feeds trigger edges in
//! through [`dispatch::EventDispatcher`] and drives a [`controller::SessionController`] from its
//! main loop.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`config`] | Runtime-adjustable classifier thresholds |
//! | [`carrier`] | Carrier profiles and the trigger sampling policy |
//! | [`dispatch`] | Interrupt-to-loop single-slot event handoff |
//! | [`counting`] | Session state, tape-stage classifier, yield |
//! | [`alarm`] | Anomaly signals and operator acknowledgement |
//! | [`controller`] | Session lifecycle and the processing-loop step |
//! | [`report`] | Text renderings of a session snapshot for the debug console |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cd firmware && cargo run --release
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod alarm;
pub mod carrier;
pub mod config;
pub mod controller;
pub mod counting;
pub mod dispatch;
pub mod report;

pub use alarm::{AlarmAck, Anomaly, AnomalyHandler};
pub use carrier::{should_evaluate, CarrierProfile, SamplingPolicy};
pub use config::Thresholds;
pub use controller::{Poll, SessionController};
pub use counting::{Session, SessionSnapshot, Stage};
pub use dispatch::{EdgeLockout, EventDispatcher, Mailbox, TriggerEvent};
