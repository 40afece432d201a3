// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Counting
//!
//! Session state and the decision logic that turns accepted samples into zone counts.
//!
//! ## Modules
//!
//! - [`session`] - The single long-lived [`Session`] and its read-only snapshot.
//! - [`classifier`] - Lead / middle / trail state machine.
//! - [`yield_rate`] - Middle-zone yield.

pub mod classifier;
pub mod session;
pub mod yield_rate;

pub use classifier::{process_sample, SampleOutcome};
pub use session::{Session, SessionSnapshot, Stage};
