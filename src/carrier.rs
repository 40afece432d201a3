// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Carrier profiles and the trigger sampling policy.
//!
//! The index-hole sensor fires once per sprocket hole. Depending on the carrier geometry a pocket
//! spans one or two holes, so not every trigger lands on a pocket worth sampling.

/// Carrier tape variants selectable by the operator.
///
/// Only [`CarrierProfile::Msop`] and [`CarrierProfile::Sot`] have a known pocket pitch. The rest
/// are listed so the menu and exhaustive matches stay stable when they are characterised.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CarrierProfile {
    /// Pockets straddle two index holes.
    #[default]
    Msop,
    /// One pocket per index hole.
    Sot,
    Qfp,
    Dfn,
    Qfn,
    Lqfp,
    Tssop,
    Ssop,
}

/// How trigger ordinals map onto evaluable samples.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SamplingPolicy {
    /// Evaluate odd ordinals only; the even edge falls between pockets.
    OddEdges,
    /// Evaluate every ordinal.
    EveryEdge,
    /// Pitch not characterised yet. Nothing is evaluated.
    Reserved,
}

impl CarrierProfile {
    /// All profiles, in menu order.
    pub const ALL: [CarrierProfile; 8] = [
        CarrierProfile::Msop,
        CarrierProfile::Sot,
        CarrierProfile::Qfp,
        CarrierProfile::Dfn,
        CarrierProfile::Qfn,
        CarrierProfile::Lqfp,
        CarrierProfile::Tssop,
        CarrierProfile::Ssop,
    ];

    /// Menu label.
    pub fn name(self) -> &'static str {
        match self {
            CarrierProfile::Msop => "MSOP Carrier",
            CarrierProfile::Sot => "SOT Carrier",
            CarrierProfile::Qfp => "QFP Carrier",
            CarrierProfile::Dfn => "DFN Carrier",
            CarrierProfile::Qfn => "QFN Carrier",
            CarrierProfile::Lqfp => "LQFP Carrier",
            CarrierProfile::Tssop => "TSSOP Carrier",
            CarrierProfile::Ssop => "SSOP Carrier",
        }
    }

    /// Position in [`CarrierProfile::ALL`].
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn policy(self) -> SamplingPolicy {
        match self {
            CarrierProfile::Msop => SamplingPolicy::OddEdges,
            CarrierProfile::Sot => SamplingPolicy::EveryEdge,
            CarrierProfile::Qfp
            | CarrierProfile::Dfn
            | CarrierProfile::Qfn
            | CarrierProfile::Lqfp
            | CarrierProfile::Tssop
            | CarrierProfile::Ssop => SamplingPolicy::Reserved,
        }
    }
}

impl SamplingPolicy {
    /// Whether the trigger with this ordinal carries a meaningful sample.
    #[inline]
    pub fn accepts(self, ordinal: u32) -> bool {
        match self {
            SamplingPolicy::OddEdges => ordinal % 2 == 1,
            SamplingPolicy::EveryEdge => ordinal > 0,
            SamplingPolicy::Reserved => false,
        }
    }
}

/// Decide whether trigger `ordinal` should be fed to the classifier for `profile`.
///
/// Ordinals start at 1 for the first trigger after a reset.
#[inline]
pub fn should_evaluate(profile: CarrierProfile, ordinal: u32) -> bool {
    profile.policy().accepts(ordinal)
}
