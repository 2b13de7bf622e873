//! Two-team battle result types.
//!
//! The battle algorithm itself runs outside this crate. These types describe
//! what a battle service hands back so the raid pipeline can fold it into
//! rewards and a terminal result.

use crate::personage::PersonageId;

/// Battle-ready snapshot of a personage or a raid opponent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattlePersonage {
    pub id: PersonageId,
    pub name: String,
    pub level: u32,
}

/// Combat statistics gathered for one personage during a battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonageBattleStats {
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub normal_attacks: u32,
    pub critical_attacks: u32,
    pub misses: u32,
    pub dodges: u32,
    pub remaining_health: u32,
}

/// Final state of one personage after the battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonageBattleResult {
    pub personage: BattlePersonage,
    pub stats: PersonageBattleStats,
}

/// Ordered per-personage results of one team.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamResult {
    pub personage_results: Vec<PersonageBattleResult>,
}

impl TeamResult {
    pub fn new(personage_results: Vec<PersonageBattleResult>) -> Self {
        Self { personage_results }
    }
}

/// Declared outcome of a two-team battle.
///
/// Raids put the opponents in the first team and the participants in the
/// second team, so only [`BattleOutcome::SecondTeamWon`] counts as a win for
/// the players. A draw is reported faithfully but treated as a loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    FirstTeamWon,
    SecondTeamWon,
    Draw,
}

impl BattleOutcome {
    pub const fn participants_won(self) -> bool {
        matches!(self, Self::SecondTeamWon)
    }
}

/// Normalized output of the battle service.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoTeamBattleResult {
    pub outcome: BattleOutcome,
    pub first_team: TeamResult,
    pub second_team: TeamResult,
}
