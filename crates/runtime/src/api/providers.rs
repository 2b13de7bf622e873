//! Capabilities the raid pipeline is wired with.
//!
//! Battle resolution and the reward, loot and research formulas live outside
//! the runtime. Implementations are plugged in behind these traits so the
//! pipeline can run against a real battle service, scripted fixtures, or
//! balance experiments.
use async_trait::async_trait;
use raid_core::{
    BattlePersonage, GeneratedItem, LaunchedEvent, Money, PersonageBattleResult, RaidDefinition,
    TwoTeamBattleResult, WorldRaidResearch,
};

use super::errors::Result;

/// Two-team battle service.
///
/// The first team is always the raid's opponents and the second team the
/// participants; the returned result keeps that order.
#[async_trait]
pub trait TwoTeamBattle: Send + Sync {
    async fn battle(
        &self,
        first_team: Vec<BattlePersonage>,
        second_team: Vec<BattlePersonage>,
    ) -> Result<TwoTeamBattleResult>;
}

/// Builds the opposing team for one raid occurrence.
pub trait RaidTeamGenerator: Send + Sync {
    fn generate(
        &self,
        raid: &RaidDefinition,
        event: &LaunchedEvent,
        participants: &[BattlePersonage],
    ) -> Vec<BattlePersonage>;
}

/// Money awarded to one participant.
pub trait RaidRewardGenerator: Send + Sync {
    fn calculate_reward(
        &self,
        participants_won: bool,
        result: &PersonageBattleResult,
        exhausted: bool,
    ) -> Money;
}

/// Optional loot dropped for one participant.
///
/// Drop chances for exhausted personages or lost raids are entirely up to
/// the implementation.
pub trait RaidItemGenerator: Send + Sync {
    fn generate_item(
        &self,
        participants_won: bool,
        personage: &BattlePersonage,
        exhausted: bool,
    ) -> Option<GeneratedItem>;
}

/// Initial research progress of a freshly launched world raid.
pub trait ResearchGenerator: Send + Sync {
    fn generate(&self) -> WorldRaidResearch;
}
