//! In-memory repository implementations for testing and local runs.

mod group;
mod launched_event;
mod personage;
mod raid;
mod world_raid;

pub use group::InMemoryGroupEventRepository;
pub use launched_event::InMemoryLaunchedEventRepository;
pub use personage::InMemoryPersonageRepository;
pub use raid::{InMemoryParticipantRepository, InMemoryRaidRepository};
pub use world_raid::InMemoryWorldRaidRepository;
