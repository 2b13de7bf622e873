//! Resolution of launched raid events.
//!
//! [`RaidProcessor::process`] turns one launched event into its terminal
//! [`RaidResult`]: roster → battle → rewards and loot → persistence →
//! difficulty feedback. The scheduler calls it at most once per launched
//! event; nothing here locks against concurrent resolutions of the same event.

use std::collections::HashSet;
use std::sync::Arc;

use raid_core::{
    BattlePersonage, CompletedRaid, LaunchedEvent, PersonageBattleResult, PersonageRaidResult,
    RaidParticipant, RaidPoints, RaidResult, RaidStatus, Roster,
};

use crate::api::{
    RaidItemGenerator, RaidRewardGenerator, RaidTeamGenerator, Result, RuntimeError,
    TwoTeamBattle,
};
use crate::repository::{
    GroupEventRepository, LaunchedEventRepository, ParticipantRepository, PersonageRepository,
    RaidRepository,
};

/// Orchestrates the resolution of launched raid events.
pub struct RaidProcessor {
    raids: Arc<dyn RaidRepository>,
    participants: Arc<dyn ParticipantRepository>,
    personages: Arc<dyn PersonageRepository>,
    groups: Arc<dyn GroupEventRepository>,
    launched_events: Arc<dyn LaunchedEventRepository>,
    battle: Arc<dyn TwoTeamBattle>,
    teams: Arc<dyn RaidTeamGenerator>,
    rewards: Arc<dyn RaidRewardGenerator>,
    items: Arc<dyn RaidItemGenerator>,
}

impl RaidProcessor {
    /// Create a new processor builder
    pub fn builder() -> RaidProcessorBuilder {
        RaidProcessorBuilder::default()
    }

    /// Resolve a launched raid event and persist its terminal result.
    ///
    /// # Errors
    ///
    /// - [`RuntimeError::RaidNotFound`] if the event has no raid bound to it
    /// - [`RuntimeError::UnknownParticipant`] / [`RuntimeError::IncompleteBattleResult`]
    ///   if the battle result does not match the roster; raised before any
    ///   money is credited
    /// - collaborator failures, unchanged
    pub async fn process(&self, event: &LaunchedEvent) -> Result<RaidResult> {
        let raid = self
            .raids
            .find_by_event(event.event_id)?
            .ok_or(RuntimeError::RaidNotFound {
                event_id: event.event_id,
                launched_event_id: event.id,
            })?;

        let roster = Roster::new(self.participants.raid_participants(event.id)?).map_err(
            |source| RuntimeError::InvalidRoster {
                launched_event_id: event.id,
                source,
            },
        )?;

        if roster.is_empty() {
            tracing::info!(launched_event = %event.id, "raid expired: nobody joined");
            let result = RaidResult::Expired;
            self.launched_events.save_result(event.id, &result)?;
            return Ok(result);
        }

        let personages: Vec<BattlePersonage> = roster
            .iter()
            .map(|participant| participant.personage.to_battle_personage())
            .collect();
        let opponents = self.teams.generate(&raid, event, &personages);
        let battle = self.battle.battle(opponents, personages).await?;
        let won = battle.outcome.participants_won();

        let pairs = match_roster(event, &roster, &battle.second_team.personage_results)?;

        let mut generated_items = Vec::new();
        let mut personage_results = Vec::with_capacity(pairs.len());
        for (participant, battle_result) in pairs {
            let reward = self
                .rewards
                .calculate_reward(won, battle_result, participant.exhausted);
            self.personages.add_money(participant.personage.id, reward)?;

            let generated =
                self.items
                    .generate_item(won, &battle_result.personage, participant.exhausted);
            tracing::debug!(
                launched_event = %event.id,
                personage = %participant.personage.id,
                exhausted = participant.exhausted,
                %reward,
                item = ?generated.as_ref().map(|generated| &generated.item.code),
                "raid participant rewarded"
            );

            let item = generated.as_ref().map(|generated| generated.item.clone());
            generated_items.extend(generated);
            personage_results.push(PersonageRaidResult {
                participant: participant.clone(),
                stats: battle_result.stats,
                reward,
                item,
            });
        }

        let completed = CompletedRaid {
            status: RaidStatus::from_win(won),
            raid,
            enemy_results: battle.first_team.personage_results,
            personage_results,
            generated_items,
            points: RaidPoints::for_outcome(event.raid_params.raid_level, won),
        };

        self.personages
            .save_raid_results(&completed.personage_results, event)?;
        self.groups.update_raid_level(event.id, won)?;

        tracing::info!(
            launched_event = %event.id,
            status = %completed.status,
            points = %completed.points,
            participants = completed.personage_results.len(),
            "raid completed"
        );

        let result = RaidResult::Completed(completed);
        self.launched_events.save_result(event.id, &result)?;
        Ok(result)
    }
}

/// Pair every player-side battle result with its roster entry, in battle order.
///
/// The battle must report each participant exactly once.
fn match_roster<'a>(
    event: &LaunchedEvent,
    roster: &'a Roster,
    results: &'a [PersonageBattleResult],
) -> Result<Vec<(&'a RaidParticipant, &'a PersonageBattleResult)>> {
    let mut seen = HashSet::with_capacity(results.len());
    let pairs = results
        .iter()
        .filter(|result| seen.insert(result.personage.id))
        .map(|result| {
            roster
                .get(result.personage.id)
                .map(|participant| (participant, result))
                .ok_or(RuntimeError::UnknownParticipant {
                    launched_event_id: event.id,
                    personage: result.personage.id,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    if pairs.len() != roster.len() || pairs.len() != results.len() {
        return Err(RuntimeError::IncompleteBattleResult {
            launched_event_id: event.id,
            expected: roster.len(),
            actual: results.len(),
        });
    }
    Ok(pairs)
}

/// Builder for [`RaidProcessor`]. Every collaborator is required.
#[derive(Default)]
pub struct RaidProcessorBuilder {
    raids: Option<Arc<dyn RaidRepository>>,
    participants: Option<Arc<dyn ParticipantRepository>>,
    personages: Option<Arc<dyn PersonageRepository>>,
    groups: Option<Arc<dyn GroupEventRepository>>,
    launched_events: Option<Arc<dyn LaunchedEventRepository>>,
    battle: Option<Arc<dyn TwoTeamBattle>>,
    teams: Option<Arc<dyn RaidTeamGenerator>>,
    rewards: Option<Arc<dyn RaidRewardGenerator>>,
    items: Option<Arc<dyn RaidItemGenerator>>,
}

impl RaidProcessorBuilder {
    pub fn raids(mut self, raids: Arc<dyn RaidRepository>) -> Self {
        self.raids = Some(raids);
        self
    }

    pub fn participants(mut self, participants: Arc<dyn ParticipantRepository>) -> Self {
        self.participants = Some(participants);
        self
    }

    pub fn personages(mut self, personages: Arc<dyn PersonageRepository>) -> Self {
        self.personages = Some(personages);
        self
    }

    pub fn groups(mut self, groups: Arc<dyn GroupEventRepository>) -> Self {
        self.groups = Some(groups);
        self
    }

    pub fn launched_events(mut self, launched_events: Arc<dyn LaunchedEventRepository>) -> Self {
        self.launched_events = Some(launched_events);
        self
    }

    pub fn battle(mut self, battle: Arc<dyn TwoTeamBattle>) -> Self {
        self.battle = Some(battle);
        self
    }

    pub fn teams(mut self, teams: Arc<dyn RaidTeamGenerator>) -> Self {
        self.teams = Some(teams);
        self
    }

    pub fn rewards(mut self, rewards: Arc<dyn RaidRewardGenerator>) -> Self {
        self.rewards = Some(rewards);
        self
    }

    pub fn items(mut self, items: Arc<dyn RaidItemGenerator>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn build(self) -> Result<RaidProcessor> {
        Ok(RaidProcessor {
            raids: self.raids.ok_or(RuntimeError::MissingCollaborator("raid repository"))?,
            participants: self
                .participants
                .ok_or(RuntimeError::MissingCollaborator("participant repository"))?,
            personages: self
                .personages
                .ok_or(RuntimeError::MissingCollaborator("personage repository"))?,
            groups: self
                .groups
                .ok_or(RuntimeError::MissingCollaborator("group event repository"))?,
            launched_events: self
                .launched_events
                .ok_or(RuntimeError::MissingCollaborator("launched event repository"))?,
            battle: self
                .battle
                .ok_or(RuntimeError::MissingCollaborator("battle service"))?,
            teams: self
                .teams
                .ok_or(RuntimeError::MissingCollaborator("raid team generator"))?,
            rewards: self
                .rewards
                .ok_or(RuntimeError::MissingCollaborator("raid reward generator"))?,
            items: self
                .items
                .ok_or(RuntimeError::MissingCollaborator("raid item generator"))?,
        })
    }
}
