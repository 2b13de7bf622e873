//! Scripted collaborators and fixtures shared by the runtime integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use raid_core::{
    BattleOutcome, BattlePersonage, EventId, GeneratedItem, Item, ItemId, ItemRarity,
    LaunchedEvent, LaunchedEventId, Money, Personage, PersonageBattleResult, PersonageBattleStats,
    PersonageId, PersonageRaidResult, RaidDefinition, RaidId, RaidParams, RaidParticipant,
    RaidResult, TeamResult, TwoTeamBattleResult, WorldRaidResearch,
};
use runtime::repository::Result as RepositoryResult;
use runtime::{
    GroupEventRepository, InMemoryGroupEventRepository, InMemoryLaunchedEventRepository,
    InMemoryParticipantRepository, InMemoryPersonageRepository, InMemoryRaidRepository,
    LaunchedEventRepository, PersonageRepository, RaidItemGenerator, RaidProcessor,
    RaidRewardGenerator, RaidTeamGenerator, RepositoryError, ResearchGenerator, Result,
    RuntimeError, TwoTeamBattle,
};

pub const WIN_REWARD: i64 = 100;
pub const LOSS_REWARD: i64 = 10;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn raid_definition(event_id: EventId) -> RaidDefinition {
    RaidDefinition {
        id: RaidId(1),
        event_id,
        code: "goblin_camp".into(),
        name: "Goblin Camp".into(),
    }
}

pub fn launched_event(id: u64, raid_level: u32) -> LaunchedEvent {
    LaunchedEvent::new(LaunchedEventId(id), EventId(10), RaidParams { raid_level })
}

pub fn participant(id: u64, exhausted: bool) -> RaidParticipant {
    RaidParticipant::new(
        Personage::new(PersonageId(id), format!("hero-{id}"), 5),
        exhausted,
    )
}

pub fn stats_for(id: PersonageId) -> PersonageBattleStats {
    PersonageBattleStats {
        damage_dealt: id.0 * 10,
        damage_taken: id.0,
        normal_attacks: 3,
        critical_attacks: 1,
        misses: 0,
        dodges: 2,
        remaining_health: 50,
    }
}

// ============================================================================
// Battle service
// ============================================================================

/// How the scripted battle reports the player team.
#[derive(Clone, Copy, Debug)]
pub enum Report {
    /// Every participant once, in reverse of the order they were sent.
    Reversed,
    /// Every participant plus a stranger who never joined.
    WithStranger,
    /// Every participant except the last one sent.
    MissingLast,
}

/// Battle service that returns a fixed outcome and records how often it ran.
pub struct ScriptedBattle {
    outcome: BattleOutcome,
    report: Report,
    calls: AtomicUsize,
    opponents_seen: Mutex<Vec<BattlePersonage>>,
}

impl ScriptedBattle {
    pub fn new(outcome: BattleOutcome) -> Self {
        Self::with_report(outcome, Report::Reversed)
    }

    pub fn with_report(outcome: BattleOutcome, report: Report) -> Self {
        Self {
            outcome,
            report,
            calls: AtomicUsize::new(0),
            opponents_seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn opponents_seen(&self) -> Vec<BattlePersonage> {
        self.opponents_seen.lock().unwrap().clone()
    }
}

fn result_for(personage: BattlePersonage) -> PersonageBattleResult {
    PersonageBattleResult {
        stats: stats_for(personage.id),
        personage,
    }
}

#[async_trait]
impl TwoTeamBattle for ScriptedBattle {
    async fn battle(
        &self,
        first_team: Vec<BattlePersonage>,
        second_team: Vec<BattlePersonage>,
    ) -> Result<TwoTeamBattleResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.opponents_seen
            .lock()
            .unwrap()
            .extend(first_team.iter().cloned());

        let mut players: Vec<_> = second_team.into_iter().rev().map(result_for).collect();
        match self.report {
            Report::Reversed => {}
            Report::WithStranger => players.push(result_for(BattlePersonage {
                id: PersonageId(9999),
                name: "stranger".into(),
                level: 1,
            })),
            Report::MissingLast => {
                players.remove(0);
            }
        }

        Ok(TwoTeamBattleResult {
            outcome: self.outcome,
            first_team: TeamResult::new(first_team.into_iter().map(result_for).collect()),
            second_team: TeamResult::new(players),
        })
    }
}

/// Battle service that is down.
pub struct FailingBattle;

#[async_trait]
impl TwoTeamBattle for FailingBattle {
    async fn battle(
        &self,
        _first_team: Vec<BattlePersonage>,
        _second_team: Vec<BattlePersonage>,
    ) -> Result<TwoTeamBattleResult> {
        Err(RuntimeError::BattleFailed("battle service unavailable".into()))
    }
}

// ============================================================================
// Generators
// ============================================================================

/// One boss whose level tracks the raid level.
pub struct SingleBoss;

impl RaidTeamGenerator for SingleBoss {
    fn generate(
        &self,
        raid: &RaidDefinition,
        event: &LaunchedEvent,
        _participants: &[BattlePersonage],
    ) -> Vec<BattlePersonage> {
        vec![BattlePersonage {
            id: PersonageId(1_000_000 + raid.id.0),
            name: format!("{} boss", raid.name),
            level: event.raid_params.raid_level,
        }]
    }
}

/// Flat rewards, halved for exhausted personages.
pub struct FlatRewards;

impl RaidRewardGenerator for FlatRewards {
    fn calculate_reward(
        &self,
        participants_won: bool,
        _result: &PersonageBattleResult,
        exhausted: bool,
    ) -> Money {
        let base = if participants_won { WIN_REWARD } else { LOSS_REWARD };
        Money::new(if exhausted { base / 2 } else { base })
    }
}

/// Drops an item for rested winners only.
pub struct RestedWinnerLoot;

impl RaidItemGenerator for RestedWinnerLoot {
    fn generate_item(
        &self,
        participants_won: bool,
        personage: &BattlePersonage,
        exhausted: bool,
    ) -> Option<GeneratedItem> {
        (participants_won && !exhausted).then(|| GeneratedItem {
            personage_id: personage.id,
            item: Item {
                id: ItemId(personage.id.0 + 500),
                code: "goblin_dagger".into(),
                rarity: ItemRarity::Rare,
            },
        })
    }
}

pub struct FixedResearch(pub u32);

impl ResearchGenerator for FixedResearch {
    fn generate(&self) -> WorldRaidResearch {
        WorldRaidResearch::new(self.0)
    }
}

// ============================================================================
// Side-effect stores
// ============================================================================

/// Shared, ordered log of the writes made by [`Recorded`] stores.
#[derive(Default)]
pub struct Journal(Mutex<Vec<&'static str>>);

impl Journal {
    fn record(&self, entry: &'static str) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

/// In-memory store that logs every write to a [`Journal`] before applying it.
pub struct Recorded<R> {
    inner: Arc<R>,
    journal: Arc<Journal>,
}

impl<R> Recorded<R> {
    pub fn new(inner: Arc<R>, journal: Arc<Journal>) -> Self {
        Self { inner, journal }
    }
}

impl PersonageRepository for Recorded<InMemoryPersonageRepository> {
    fn add_money(&self, personage_id: PersonageId, amount: Money) -> RepositoryResult<()> {
        self.journal.record("add_money");
        self.inner.add_money(personage_id, amount)
    }

    fn save_raid_results(
        &self,
        results: &[PersonageRaidResult],
        event: &LaunchedEvent,
    ) -> RepositoryResult<()> {
        self.journal.record("save_raid_results");
        self.inner.save_raid_results(results, event)
    }
}

impl GroupEventRepository for Recorded<InMemoryGroupEventRepository> {
    fn update_raid_level(
        &self,
        launched_event_id: LaunchedEventId,
        won: bool,
    ) -> RepositoryResult<()> {
        self.journal.record("update_raid_level");
        self.inner.update_raid_level(launched_event_id, won)
    }
}

impl LaunchedEventRepository for Recorded<InMemoryLaunchedEventRepository> {
    fn save_result(
        &self,
        launched_event_id: LaunchedEventId,
        result: &RaidResult,
    ) -> RepositoryResult<()> {
        self.journal.record("save_result");
        self.inner.save_result(launched_event_id, result)
    }

    fn find_result(
        &self,
        launched_event_id: LaunchedEventId,
    ) -> RepositoryResult<Option<RaidResult>> {
        self.inner.find_result(launched_event_id)
    }
}

/// Group store whose backend is down.
pub struct UnavailableGroups;

impl GroupEventRepository for UnavailableGroups {
    fn update_raid_level(&self, _: LaunchedEventId, _: bool) -> RepositoryResult<()> {
        Err(RepositoryError::Backend("group store offline".into()))
    }
}

// ============================================================================
// Wiring
// ============================================================================

/// In-memory repositories plus a processor wired to them.
pub struct Harness {
    pub raids: Arc<InMemoryRaidRepository>,
    pub participants: Arc<InMemoryParticipantRepository>,
    pub personages: Arc<InMemoryPersonageRepository>,
    pub groups: Arc<InMemoryGroupEventRepository>,
    pub launched_events: Arc<InMemoryLaunchedEventRepository>,
    pub processor: RaidProcessor,
}

impl Harness {
    pub fn new(battle: Arc<dyn TwoTeamBattle>) -> Self {
        let raids = Arc::new(InMemoryRaidRepository::new());
        raids
            .insert(raid_definition(EventId(10)))
            .expect("raid should be stored");
        let participants = Arc::new(InMemoryParticipantRepository::new());
        let personages = Arc::new(InMemoryPersonageRepository::new());
        let groups = Arc::new(InMemoryGroupEventRepository::new());
        let launched_events = Arc::new(InMemoryLaunchedEventRepository::new());

        let processor = processor(
            raids.clone(),
            participants.clone(),
            battle,
            personages.clone(),
            groups.clone(),
            launched_events.clone(),
        );

        Self {
            raids,
            participants,
            personages,
            groups,
            launched_events,
            processor,
        }
    }

    /// Harness whose side-effect stores log their writes to the returned journal.
    pub fn recorded(battle: Arc<dyn TwoTeamBattle>) -> (Self, Arc<Journal>) {
        let mut harness = Self::new(battle.clone());
        let journal = Arc::new(Journal::default());
        harness.processor = processor(
            harness.raids.clone(),
            harness.participants.clone(),
            battle,
            Arc::new(Recorded::new(harness.personages.clone(), journal.clone())),
            Arc::new(Recorded::new(harness.groups.clone(), journal.clone())),
            Arc::new(Recorded::new(harness.launched_events.clone(), journal.clone())),
        );
        (harness, journal)
    }

    /// Harness that resolves raids against the given group store.
    pub fn with_groups(
        battle: Arc<dyn TwoTeamBattle>,
        groups: Arc<dyn GroupEventRepository>,
    ) -> Self {
        let mut harness = Self::new(battle.clone());
        harness.processor = processor(
            harness.raids.clone(),
            harness.participants.clone(),
            battle,
            harness.personages.clone(),
            groups,
            harness.launched_events.clone(),
        );
        harness
    }

    pub fn join(&self, event: &LaunchedEvent, participant: RaidParticipant) {
        self.participants
            .join(event.id, participant)
            .expect("join should be stored");
    }

    pub fn balance(&self, id: u64) -> Money {
        self.personages
            .balance(PersonageId(id))
            .expect("balance should be readable")
    }
}

fn processor(
    raids: Arc<InMemoryRaidRepository>,
    participants: Arc<InMemoryParticipantRepository>,
    battle: Arc<dyn TwoTeamBattle>,
    personages: Arc<dyn PersonageRepository>,
    groups: Arc<dyn GroupEventRepository>,
    launched_events: Arc<dyn LaunchedEventRepository>,
) -> RaidProcessor {
    RaidProcessor::builder()
        .raids(raids)
        .participants(participants)
        .personages(personages)
        .groups(groups)
        .launched_events(launched_events)
        .battle(battle)
        .teams(Arc::new(SingleBoss))
        .rewards(Arc::new(FlatRewards))
        .items(Arc::new(RestedWinnerLoot))
        .build()
        .expect("all collaborators are set")
}
