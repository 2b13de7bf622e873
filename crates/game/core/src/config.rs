use crate::money::Money;

/// Raid configuration constants and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RaidConfig {
    pub world_raid: WorldRaidConfig,
}

/// Tunables for launching the world raid singleton.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldRaidConfig {
    /// Base fund a freshly launched world raid starts with.
    pub init_fund: Money,
    /// Random spread applied to `init_fund`, in percent on either side.
    pub fund_variance_percent: u8,
}

impl WorldRaidConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INIT_FUND: Money = Money::new(1000);
    pub const DEFAULT_FUND_VARIANCE_PERCENT: u8 = 10;

    pub const fn new(init_fund: Money) -> Self {
        Self {
            init_fund,
            fund_variance_percent: Self::DEFAULT_FUND_VARIANCE_PERCENT,
        }
    }
}

impl Default for WorldRaidConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INIT_FUND)
    }
}
