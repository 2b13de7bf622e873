//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate:
//! the error type and the collaborator capabilities the raid pipeline is
//! wired with.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{
    RaidItemGenerator, RaidRewardGenerator, RaidTeamGenerator, ResearchGenerator, TwoTeamBattle,
};
