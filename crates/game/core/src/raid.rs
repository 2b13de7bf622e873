//! Raid records: launched events, rosters and terminal raid results.
//!
//! A launched raid event moves through exactly one resolution and ends in a
//! single [`RaidResult`]. Every type here is immutable once constructed; the
//! runtime builds them and hands them to repositories.

use core::fmt;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use strum::Display;
use thiserror::Error;

use crate::battle::{PersonageBattleResult, PersonageBattleStats};
use crate::money::{Money, RaidPoints};
use crate::personage::{Personage, PersonageId};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of a raid template's scheduling event.
    EventId
);
id_type!(
    /// Identifier of one scheduled occurrence of an event.
    LaunchedEventId
);
id_type!(RaidId);
id_type!(ItemId);

/// Per-occurrence raid parameters captured at launch time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaidParams {
    pub raid_level: u32,
}

/// One scheduled occurrence of a raid. Owned by the scheduler, read-only here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaunchedEvent {
    pub id: LaunchedEventId,
    pub event_id: EventId,
    pub launched_at: DateTime<Utc>,
    pub raid_params: RaidParams,
}

impl LaunchedEvent {
    pub fn new(id: LaunchedEventId, event_id: EventId, raid_params: RaidParams) -> Self {
        Self {
            id,
            event_id,
            launched_at: Utc::now(),
            raid_params,
        }
    }
}

/// Raid definition bound to an event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaidDefinition {
    pub id: RaidId,
    pub event_id: EventId,
    pub code: String,
    pub name: String,
}

/// A personage's join record for one launched event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaidParticipant {
    pub personage: Personage,
    /// True if the personage joined while depleted.
    pub exhausted: bool,
}

impl RaidParticipant {
    pub fn new(personage: Personage, exhausted: bool) -> Self {
        Self {
            personage,
            exhausted,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("personage {0} joined the raid more than once")]
    DuplicatePersonage(PersonageId),
}

/// Snapshot of everyone who joined a launched event, keyed by personage id.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    participants: Vec<RaidParticipant>,
    index: HashMap<PersonageId, usize>,
}

impl Roster {
    pub fn new(participants: Vec<RaidParticipant>) -> Result<Self, RosterError> {
        let mut index = HashMap::with_capacity(participants.len());
        for (position, participant) in participants.iter().enumerate() {
            let id = participant.personage.id;
            if index.insert(id, position).is_some() {
                return Err(RosterError::DuplicatePersonage(id));
            }
        }
        Ok(Self {
            participants,
            index,
        })
    }

    pub fn get(&self, id: PersonageId) -> Option<&RaidParticipant> {
        self.index.get(&id).map(|&position| &self.participants[position])
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RaidParticipant> {
        self.participants.iter()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub code: String,
    pub rarity: ItemRarity,
}

/// Loot produced for a personage during resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedItem {
    pub personage_id: PersonageId,
    pub item: Item,
}

/// Per-participant outcome of one resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonageRaidResult {
    pub participant: RaidParticipant,
    pub stats: PersonageBattleStats,
    pub reward: Money,
    pub item: Option<Item>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RaidStatus {
    Success,
    Failure,
}

impl RaidStatus {
    pub const fn from_win(won: bool) -> Self {
        if won { Self::Success } else { Self::Failure }
    }
}

/// Data of a raid that actually took place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletedRaid {
    pub status: RaidStatus,
    pub raid: RaidDefinition,
    /// Combat statistics of the non-player team.
    pub enemy_results: Vec<PersonageBattleResult>,
    pub personage_results: Vec<PersonageRaidResult>,
    pub generated_items: Vec<GeneratedItem>,
    pub points: RaidPoints,
}

/// Terminal state of a launched raid event. Written exactly once per event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "data"))]
pub enum RaidResult {
    /// Nobody was on the roster when the event was resolved.
    Expired,
    Completed(CompletedRaid),
}

impl RaidResult {
    pub fn status(&self) -> Option<RaidStatus> {
        match self {
            Self::Expired => None,
            Self::Completed(completed) => Some(completed.status),
        }
    }

    pub fn as_completed(&self) -> Option<&CompletedRaid> {
        match self {
            Self::Expired => None,
            Self::Completed(completed) => Some(completed),
        }
    }
}
