//! Runtime orchestration for raid events and the world raid.
//!
//! This crate wires the collaborator capabilities (battle service, reward,
//! loot and research generators) and repositories into the raid use cases.
//! Schedulers call [`RaidProcessor`] once per due launched event; bot handlers
//! call [`WorldRaidLauncher`] when a player joins the world raid.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the error type and collaborator traits
//! - [`processing`] hosts the raid resolver and the world raid launcher
//! - [`repository`] provides storage contracts and in-memory adapters
//! - [`runtime`] holds configuration loading
pub mod api;
pub mod processing;
pub mod repository;
pub mod runtime;

pub use api::{
    RaidItemGenerator, RaidRewardGenerator, RaidTeamGenerator, ResearchGenerator, Result,
    RuntimeError, TwoTeamBattle,
};
pub use processing::{RaidProcessor, RaidProcessorBuilder, WorldRaidLauncher};
pub use repository::{
    GroupEventRepository, InMemoryGroupEventRepository, InMemoryLaunchedEventRepository,
    InMemoryParticipantRepository, InMemoryPersonageRepository, InMemoryRaidRepository,
    InMemoryWorldRaidRepository, Insertion, LaunchedEventRepository, ParticipantRepository,
    PersonageRepository, RaidRepository, RepositoryError, WorldRaidRepository,
};
pub use runtime::RuntimeConfig;
