//! Chain teleports driven by the tokio-backed scheduler.

mod common;

use portalguns::config::{SchedulerConfig, TeleportConfig};
use portalguns::scheduler::TokioScheduler;
use portalguns::teleport::{Chain, Teleporter};
use portalguns::world::{EntityGraph, EntityKind, MemoryWorld};
use std::sync::Arc;
use std::time::Duration;
use common::{destination, init_tracing, origin};
use tokio::sync::oneshot;

#[tokio::test(start_paused = true)]
async fn relink_runs_after_wall_clock_delay() {
    init_tracing();
    let world = Arc::new(MemoryWorld::new());
    let horse = world.spawn(EntityKind::Creature, origin());
    let rider = world.spawn(EntityKind::Player, origin());
    assert!(world.set_passenger(horse, rider));

    let teleporter = Teleporter::new(world.clone(), TeleportConfig::default());
    let scheduler = TokioScheduler::new(SchedulerConfig::default().tick()).unwrap();

    let (tx, rx) = oneshot::channel::<Chain>();
    teleporter
        .teleport(rider, &destination(), &scheduler, move |chain| {
            let _ = tx.send(chain);
        })
        .unwrap();

    assert_eq!(world.passenger(horse), None);

    // Five ticks of 50ms; paused time auto-advances once everything idles.
    let chain = tokio::time::timeout(Duration::from_secs(1), rx)
        .await
        .expect("relink within a second")
        .expect("callback fired");

    assert_eq!(chain.members(), &[horse, rider]);
    assert_eq!(world.passenger(horse), Some(rider));
    assert_eq!(world.location(rider), Some(destination()));
}

#[tokio::test(start_paused = true)]
async fn cancelled_relink_leaves_chain_apart() {
    let world = Arc::new(MemoryWorld::new());
    let boat = world.spawn(EntityKind::Object, origin());
    let sailor = world.spawn(EntityKind::Player, origin());
    assert!(world.set_passenger(boat, sailor));

    let teleporter = Teleporter::new(world.clone(), TeleportConfig::default());
    let scheduler = TokioScheduler::new(Duration::from_millis(50)).unwrap();

    let handle = teleporter
        .teleport(boat, &destination(), &scheduler, |_| panic!("cancelled"))
        .unwrap();
    handle.cancel();

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(world.passenger(boat), None);
}
