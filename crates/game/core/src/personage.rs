//! Personage identity and its battle-ready projection.

use core::fmt;

use crate::battle::BattlePersonage;

/// Unique identifier of a personage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PersonageId(pub u64);

impl fmt::Display for PersonageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player-controlled character as seen by the raid subsystem.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Personage {
    pub id: PersonageId,
    pub name: String,
    pub level: u32,
}

impl Personage {
    pub fn new(id: PersonageId, name: impl Into<String>, level: u32) -> Self {
        Self {
            id,
            name: name.into(),
            level,
        }
    }

    /// Project this personage into the representation the battle service consumes.
    pub fn to_battle_personage(&self) -> BattlePersonage {
        BattlePersonage {
            id: self.id,
            name: self.name.clone(),
            level: self.level,
        }
    }
}
