// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Text renderings of a [`SessionSnapshot`] for the debug console.
//!
//! Field keys follow the counting screen: `F` lead empty, `LOSS` middle losses, `C` middle chips,
//! `H` index-hole triggers, `T` trail empty, `ADD` extra chips.
//!
//! ```ignore
//! writeln!(usart, "{}\r", snapshot.live())?;
//! ```

use core::fmt;

use crate::counting::SessionSnapshot;

/// Live counting line.
pub struct Live<'a>(&'a SessionSnapshot);

/// Result of the last run, or `No Data` if nothing was counted since the reset.
pub struct LastResult<'a>(&'a SessionSnapshot);

impl SessionSnapshot {
    pub fn live(&self) -> Live<'_> {
        Live(self)
    }

    pub fn last_result(&self) -> LastResult<'_> {
        LastResult(self)
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, s: &SessionSnapshot) -> fmt::Result {
    write!(
        f,
        "Yield:{:.1}% F:{} LOSS:{} C:{} H:{} T:{} ADD:{}",
        s.yield_rate,
        s.lead_empty_count,
        s.middle_loss_count,
        s.middle_chip_count,
        s.trigger_ordinal,
        s.trail_empty_count,
        s.edge_extra_count
    )
}

impl fmt::Display for Live<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.0.stage.label())?;
        write_counts(f, self.0)
    }
}

impl fmt::Display for LastResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.data_valid {
            return f.write_str("No Data");
        }
        f.write_str("Last ")?;
        write_counts(f, self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::counting::{Session, Stage};

    #[test]
    fn live_line_lists_every_counter() {
        let mut s = Session::new();
        s.stage = Stage::Middle;
        s.lead_empty_count = 2;
        s.middle_chip_count = 9;
        s.middle_loss_count = 1;
        s.edge_extra_count = 3;
        s.yield_rate = 90.0;
        let snap = s.snapshot(24);
        assert_eq!(
            snap.live().to_string(),
            "Chips Yield:90.0% F:2 LOSS:1 C:9 H:24 T:0 ADD:3"
        );
    }

    #[test]
    fn last_result_needs_valid_data() {
        let mut s = Session::new();
        assert_eq!(s.snapshot(0).last_result().to_string(), "No Data");

        s.data_valid = true;
        s.stage = Stage::TrailEmpty;
        s.middle_chip_count = 5;
        s.trail_empty_count = 3;
        s.yield_rate = 100.0;
        assert_eq!(
            s.snapshot(18).last_result().to_string(),
            "Last Yield:100.0% F:0 LOSS:0 C:5 H:18 T:3 ADD:0"
        );
    }
}
