/// Scenario tests for the discovery handshake, driven through the Bridge
/// facade the way a host application drives it.
///
/// The two layers may start in either order: the bridge searches
/// indefinitely while the simulation has nothing tagged, and binds within
/// one extra pass once the matching record exists.

use animsync_bridge::{Bridge, BridgeConfig, BridgeStatus, HandshakeFault};
use animsync_shared::{DiscoveryTag, InstanceId, MemoryStore, SimStore, TagId};
use animsync_test::{
    associate, locomotion_table, player_bridge, store_with_candidate, MockAnimator,
    PLAYER_INSTANCE, PLAYER_TAG,
};

#[test]
fn searching_never_times_out() {
    let mut store = MemoryStore::new();
    let mut bridge = player_bridge(locomotion_table());
    let mut animator = MockAnimator::new();

    for _ in 0..100 {
        assert_eq!(
            bridge.tick(&mut store, &mut animator),
            BridgeStatus::Searching
        );
    }
    assert!(bridge.fault().is_none());
    assert_eq!(animator.call_count(), 0);
}

#[test]
fn presentation_first_then_simulation() {
    let mut store = MemoryStore::new();
    let mut bridge = player_bridge(locomotion_table());
    let mut animator = MockAnimator::new();

    bridge.tick(&mut store, &mut animator);
    bridge.tick(&mut store, &mut animator);
    assert_eq!(bridge.status(), BridgeStatus::Searching);

    // simulation arrives late
    let record = store.spawn_tagged(DiscoveryTag::new(PLAYER_TAG, PLAYER_INSTANCE));

    assert_eq!(
        bridge.tick(&mut store, &mut animator),
        BridgeStatus::Associating
    );
    assert_eq!(
        bridge.tick(&mut store, &mut animator),
        BridgeStatus::Associated
    );
    assert_eq!(bridge.record(), Some(record));
}

#[test]
fn simulation_first_then_presentation() {
    let (mut store, record) = store_with_candidate();
    let mut bridge = player_bridge(locomotion_table());
    let mut animator = MockAnimator::new();

    associate(&mut bridge, &mut store, &mut animator);
    assert_eq!(bridge.record(), Some(record));
}

#[test]
fn association_attaches_the_exchange_surface() {
    let (mut store, record) = store_with_candidate();
    let table = locomotion_table();
    let mut bridge = player_bridge(table.clone());
    let mut animator = MockAnimator::new();

    assert!(store.bridge_state(&record).is_none());
    assert!(store.param_buffer(&record).is_none());

    associate(&mut bridge, &mut store, &mut animator);

    let state = store.bridge_state(&record).expect("state attached");
    assert!(!state.disabled);
    assert_eq!(state.speed_scale, 1.0);
    let buffer = store.param_buffer(&record).expect("buffer attached");
    assert_eq!(buffer.len(), table.len());
}

#[test]
fn mismatched_candidates_fail_terminally_with_a_retrievable_fault() {
    let mut store = MemoryStore::new();
    // right tag, wrong instance; plus an unrelated archetype
    store.spawn_tagged(DiscoveryTag::new(PLAYER_TAG, InstanceId::new(2)));
    store.spawn_tagged(DiscoveryTag::new(TagId::from_name("Enemy"), InstanceId::new(1)));
    let mut bridge = player_bridge(locomotion_table());
    let mut animator = MockAnimator::new();

    bridge.tick(&mut store, &mut animator);
    assert_eq!(bridge.tick(&mut store, &mut animator), BridgeStatus::Failed);

    match bridge.fault() {
        Some(HandshakeFault::NoMatchingCandidate {
            tag,
            instance,
            candidates,
        }) => {
            assert_eq!(*tag, PLAYER_TAG);
            assert_eq!(*instance, PLAYER_INSTANCE);
            assert_eq!(*candidates, 2);
        }
        other => panic!("Expected NoMatchingCandidate fault, got {:?}", other),
    }

    // terminal even after a matching record appears
    store.spawn_tagged(DiscoveryTag::new(PLAYER_TAG, PLAYER_INSTANCE));
    assert_eq!(bridge.tick(&mut store, &mut animator), BridgeStatus::Failed);
    assert_eq!(animator.call_count(), 0);
}

#[test]
fn two_instances_of_the_same_archetype_bind_to_their_own_records() {
    let mut store = MemoryStore::new();
    let record_one = store.spawn_tagged(DiscoveryTag::new(PLAYER_TAG, InstanceId::new(1)));
    let record_two = store.spawn_tagged(DiscoveryTag::new(PLAYER_TAG, InstanceId::new(2)));

    let table = locomotion_table();
    let mut bridge_one = Bridge::new(
        table.clone(),
        PLAYER_TAG,
        InstanceId::new(1),
        BridgeConfig::default(),
    );
    let mut bridge_two = Bridge::new(
        table,
        PLAYER_TAG,
        InstanceId::new(2),
        BridgeConfig::default(),
    );
    let mut animator_one = MockAnimator::new();
    let mut animator_two = MockAnimator::new();

    associate(&mut bridge_one, &mut store, &mut animator_one);
    associate(&mut bridge_two, &mut store, &mut animator_two);

    assert_eq!(bridge_one.record(), Some(record_one));
    assert_eq!(bridge_two.record(), Some(record_two));
}

#[test]
fn cancelled_mid_search_stays_cancelled() {
    let mut store = MemoryStore::new();
    let mut bridge = player_bridge(locomotion_table());
    let mut animator = MockAnimator::new();

    bridge.tick(&mut store, &mut animator);
    bridge.cancel();

    // a perfect candidate appears afterwards
    store.spawn_tagged(DiscoveryTag::new(PLAYER_TAG, PLAYER_INSTANCE));
    assert_eq!(
        bridge.tick(&mut store, &mut animator),
        BridgeStatus::Cancelled
    );
    assert_eq!(bridge.record(), None);
}
