//! Raid domain logic and data types shared across the game services.
//!
//! `raid-core` defines the canonical raid records (launched events, rosters,
//! battle results, terminal raid results, the world raid singleton) and the
//! pure rank-window renderer used by leaderboards. Everything here is free of
//! I/O; orchestration lives in the `runtime` crate and consumes these types.
pub mod battle;
pub mod config;
pub mod error;
pub mod money;
pub mod personage;
pub mod raid;
pub mod top;
pub mod world_raid;

pub use battle::{
    BattleOutcome, BattlePersonage, PersonageBattleResult, PersonageBattleStats, TeamResult,
    TwoTeamBattleResult,
};
pub use config::{RaidConfig, WorldRaidConfig};
pub use error::{ErrorSeverity, GameError};
pub use money::{Money, RaidPoints};
pub use personage::{Personage, PersonageId};
pub use raid::{
    CompletedRaid, EventId, GeneratedItem, Item, ItemId, ItemRarity, LaunchedEvent,
    LaunchedEventId, PersonageRaidResult, RaidDefinition, RaidId, RaidParams, RaidParticipant,
    RaidResult, RaidStatus, Roster, RosterError,
};
pub use top::{TopPosition, TopResult};
pub use world_raid::{ActiveWorldRaid, WorldRaidId, WorldRaidResearch, WorldRaidTemplate};
