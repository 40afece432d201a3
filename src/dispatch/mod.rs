// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Trigger Handoff
//!
//! Moves trigger edges out of the interrupt handler and into the processing loop.
//!
//! ## Modules
//!
//! - [`mailbox`] - Lock-free single-slot mailbox that overwrites on collision.
//! - [`dispatcher`] - Ordinal counter and arming gate in front of the mailbox.
//! - [`lockout`] - Time window that swallows bounced trigger edges.

pub mod dispatcher;
pub mod lockout;
pub mod mailbox;

pub use dispatcher::EventDispatcher;
pub use lockout::EdgeLockout;
pub use mailbox::{Mailbox, TriggerEvent};
