mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use common::{FixedResearch, init_tracing};
use raid_content::ContentFactory;
use raid_core::{
    ActiveWorldRaid, ErrorSeverity, GameError, Money, WorldRaidConfig, WorldRaidResearch,
    WorldRaidTemplate,
};
use runtime::{
    InMemoryWorldRaidRepository, Insertion, RuntimeConfig, RuntimeError, WorldRaidLauncher,
    WorldRaidRepository,
};

fn template(code: &str) -> WorldRaidTemplate {
    WorldRaidTemplate {
        code: code.into(),
        name: code.to_uppercase(),
        description: String::new(),
    }
}

fn launcher(storage: Arc<dyn WorldRaidRepository>) -> WorldRaidLauncher {
    WorldRaidLauncher::new(
        storage,
        Arc::new(FixedResearch(25)),
        WorldRaidConfig::new(Money::new(1000)),
    )
}

#[test]
fn second_call_returns_the_same_active_raid() {
    init_tracing();
    let storage = Arc::new(InMemoryWorldRaidRepository::new(vec![
        template("dragon"),
        template("colossus"),
    ]));
    let launcher = launcher(storage.clone());

    let first = launcher.get_or_launch().expect("raid launches");
    let second = launcher.get_or_launch().expect("raid is returned");

    assert_eq!(first, second);
    assert_eq!(first.research, WorldRaidResearch::new(25));
    assert!(storage.templates().contains(&first.template));
}

#[test]
fn launched_fund_stays_within_ten_percent_of_base() {
    init_tracing();
    let storage = Arc::new(InMemoryWorldRaidRepository::new(vec![template("dragon")]));
    let launcher = launcher(storage.clone());

    for _ in 0..200 {
        let raid = launcher.get_or_launch().expect("raid launches");
        let fund = raid.fund.value();
        assert!((900..=1100).contains(&fund), "fund {fund} out of bounds");
        storage.finish_active().expect("raid finishes");
    }
}

#[test]
fn finished_raid_is_replaced_by_a_new_launch() {
    init_tracing();
    let storage = Arc::new(InMemoryWorldRaidRepository::new(vec![template("dragon")]));
    let launcher = launcher(storage.clone());

    let first = launcher.get_or_launch().unwrap();
    storage.finish_active().unwrap();
    let second = launcher.get_or_launch().unwrap();

    assert_ne!(first.id, second.id);
}

#[test]
fn empty_template_pool_is_fatal() {
    init_tracing();
    let launcher = launcher(Arc::new(InMemoryWorldRaidRepository::new(Vec::new())));

    let err = launcher.get_or_launch().unwrap_err();

    assert!(matches!(err, RuntimeError::WorldRaidTemplatesMissing));
    assert_eq!(err.severity(), ErrorSeverity::Fatal);
}

/// Storage where another caller launches the raid between our read and our
/// create: the first `active()` misses the concurrent winner.
struct LosingRace {
    inner: InMemoryWorldRaidRepository,
    stale_read_pending: AtomicBool,
}

impl WorldRaidRepository for LosingRace {
    fn active(&self) -> runtime::repository::Result<Option<ActiveWorldRaid>> {
        if self.stale_read_pending.swap(false, Ordering::SeqCst) {
            return Ok(None);
        }
        self.inner.active()
    }

    fn random_template(&self) -> runtime::repository::Result<Option<WorldRaidTemplate>> {
        self.inner.random_template()
    }

    fn create_active(
        &self,
        template: &WorldRaidTemplate,
        fund: Money,
        research: WorldRaidResearch,
    ) -> runtime::repository::Result<Insertion> {
        self.inner.create_active(template, fund, research)
    }

    fn finish_active(&self) -> runtime::repository::Result<Option<ActiveWorldRaid>> {
        self.inner.finish_active()
    }
}

#[test]
fn losing_the_launch_race_returns_the_winner() {
    init_tracing();
    let inner = InMemoryWorldRaidRepository::new(vec![template("dragon")]);
    let winner_fund = Money::new(4242);
    inner
        .create_active(&template("dragon"), winner_fund, WorldRaidResearch::new(1))
        .unwrap();
    let winner = inner.active().unwrap().unwrap();

    let storage = Arc::new(LosingRace {
        inner,
        stale_read_pending: AtomicBool::new(true),
    });
    let raid = launcher(storage).get_or_launch().expect("race is not an error");

    assert_eq!(raid, winner);
    assert_eq!(raid.fund, winner_fund);
}

#[test]
fn bundled_content_launches_a_configured_raid() {
    init_tracing();
    let content = ContentFactory::bundled();
    let config = RuntimeConfig::from_content(&content).expect("bundled config loads");
    let templates = content
        .load_world_raid_templates()
        .expect("bundled templates load");
    let storage = Arc::new(InMemoryWorldRaidRepository::new(templates.clone()));

    let launcher = WorldRaidLauncher::new(
        storage,
        Arc::new(FixedResearch(10)),
        config.raid.world_raid.clone(),
    );
    let raid = launcher.get_or_launch().expect("raid launches");

    assert!(templates.contains(&raid.template));
    let (low, high) = config
        .raid
        .world_raid
        .init_fund
        .percent_bounds(config.raid.world_raid.fund_variance_percent);
    assert!(raid.fund >= low && raid.fund <= high);
}

#[test]
fn missing_content_is_reported_as_fatal() {
    let dir = std::env::temp_dir().join("raid-content-does-not-exist");
    let err = RuntimeConfig::from_content(&ContentFactory::new(dir)).unwrap_err();

    assert!(matches!(err, RuntimeError::Content(_)));
    assert_eq!(err.severity(), ErrorSeverity::Fatal);
}
