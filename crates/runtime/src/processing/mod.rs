//! Raid use cases driven by the scheduler and the bot layer.
//!
//! - [`RaidProcessor`] resolves one launched raid event into its terminal result
//! - [`WorldRaidLauncher`] returns the world raid singleton, launching it on demand

mod raid;
mod world_raid;

pub use raid::{RaidProcessor, RaidProcessorBuilder};
pub use world_raid::{WorldRaidLauncher, roll_fund};
