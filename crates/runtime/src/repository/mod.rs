//! Repository layer for raid runtime data.
//!
//! Repositories handle data that CHANGES as raids are played:
//! - Rosters and personage balances
//! - Terminal raid results of launched events
//! - The active world raid singleton
//!
//! Static content (world raid templates, configuration) is loaded by
//! `raid-content` and handed to repositories at construction.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::{
    InMemoryGroupEventRepository, InMemoryLaunchedEventRepository, InMemoryParticipantRepository,
    InMemoryPersonageRepository, InMemoryRaidRepository, InMemoryWorldRaidRepository,
};
pub use traits::{
    GroupEventRepository, Insertion, LaunchedEventRepository, ParticipantRepository,
    PersonageRepository, RaidRepository, WorldRaidRepository,
};
