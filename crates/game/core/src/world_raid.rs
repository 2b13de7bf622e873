//! World raid singleton records.

use core::fmt;

use crate::money::Money;

/// Identifier assigned by persistence when an active world raid is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WorldRaidId(pub u64);

impl fmt::Display for WorldRaidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Template a world raid is launched from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldRaidTemplate {
    pub code: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// Research progress the community has to complete before the boss fight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldRaidResearch {
    pub contribution: u32,
    pub required: u32,
}

impl WorldRaidResearch {
    pub const fn new(required: u32) -> Self {
        Self {
            contribution: 0,
            required,
        }
    }

    pub const fn is_finished(&self) -> bool {
        self.contribution >= self.required
    }
}

/// The single world raid currently open for joining.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveWorldRaid {
    pub id: WorldRaidId,
    pub template: WorldRaidTemplate,
    pub fund: Money,
    pub research: WorldRaidResearch,
}
