// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Middle-zone yield.

/// Percentage of middle-zone pockets that held a chip, `0.0` before any middle pocket is seen.
///
/// Recomputed from scratch after every accepted sample rather than tracked incrementally, so a
/// retroactive loss correction is reflected immediately.
pub fn compute(middle_chip_count: u32, middle_loss_count: u32) -> f32 {
    let total = u64::from(middle_chip_count) + u64::from(middle_loss_count);
    if total > 0 {
        middle_chip_count as f32 * 100.0 / total as f32
    } else {
        0.0
    }
}
