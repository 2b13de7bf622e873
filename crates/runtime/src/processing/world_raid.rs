//! Idempotent launch of the world raid singleton.

use std::sync::Arc;

use rand::Rng;
use raid_core::{ActiveWorldRaid, Money, WorldRaidConfig};

use crate::api::{ResearchGenerator, Result, RuntimeError};
use crate::repository::{Insertion, WorldRaidRepository};

/// Returns the active world raid, launching one from a random template if
/// none is running.
///
/// Holds no cached state: every call asks the repository, which is the only
/// place the singleton is enforced.
pub struct WorldRaidLauncher {
    storage: Arc<dyn WorldRaidRepository>,
    research: Arc<dyn ResearchGenerator>,
    config: WorldRaidConfig,
}

impl WorldRaidLauncher {
    pub fn new(
        storage: Arc<dyn WorldRaidRepository>,
        research: Arc<dyn ResearchGenerator>,
        config: WorldRaidConfig,
    ) -> Self {
        Self {
            storage,
            research,
            config,
        }
    }

    /// Get the active world raid or launch a new one.
    ///
    /// Losing a launch race to a concurrent caller is not an error: the raid
    /// the winner created is returned.
    pub fn get_or_launch(&self) -> Result<ActiveWorldRaid> {
        self.get_or_launch_with(&mut rand::thread_rng())
    }

    /// Same as [`Self::get_or_launch`] with an explicit randomness source for the fund.
    pub fn get_or_launch_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ActiveWorldRaid> {
        if let Some(active) = self.storage.active()? {
            return Ok(active);
        }

        let template = self
            .storage
            .random_template()?
            .ok_or(RuntimeError::WorldRaidTemplatesMissing)?;
        let fund = roll_fund(&self.config, rng);
        let research = self.research.generate();

        tracing::info!(template = %template.code, %fund, "launching world raid");
        match self.storage.create_active(&template, fund, research)? {
            Insertion::Inserted => {}
            Insertion::AlreadyActive => {
                tracing::warn!(
                    template = %template.code,
                    "world raid was launched concurrently, using the active one"
                );
            }
        }

        self.storage
            .active()?
            .ok_or(RuntimeError::ActiveWorldRaidMissing)
    }
}

/// Initial fund: the configured base spread by `fund_variance_percent` either way.
pub fn roll_fund<R: Rng + ?Sized>(config: &WorldRaidConfig, rng: &mut R) -> Money {
    let (low, high) = config.init_fund.percent_bounds(config.fund_variance_percent);
    Money::new(rng.gen_range(low.value()..=high.value()))
}
