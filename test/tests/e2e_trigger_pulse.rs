/// End-to-end exchange over a pre-hashed three-parameter schema.
///
/// One batch of simulation writes (a bool, a float, a fired trigger) must
/// reach the player in a single cycle, the trigger must clear on the next
/// cycle without any re-consumption, and the cycle after that must touch
/// nothing but the playback rate.

use std::sync::Arc;

use animsync_bridge::{Bridge, BridgeConfig, BridgeStatus};
use animsync_shared::{
    IdentifierTable, ParamId, ParamKind, ParamSchema, ParamValue, SchemaEntry, SimStore,
};
use animsync_test::{
    store_with_candidate, write_param, AnimatorCall, MockAnimator, PLAYER_INSTANCE, PLAYER_TAG,
};

const STANCE: ParamId = ParamId::new(0x1A);
const THROTTLE: ParamId = ParamId::new(0x2B);
const FIRE: ParamId = ParamId::new(0x3C);

fn pre_hashed_table() -> Arc<IdentifierTable> {
    let schema = ParamSchema::from_entries([
        SchemaEntry::new(STANCE, ParamKind::Bool),
        SchemaEntry::new(THROTTLE, ParamKind::Float),
        SchemaEntry::new(FIRE, ParamKind::Trigger),
    ]);
    Arc::new(IdentifierTable::build(&schema).expect("pre-hashed schema is valid"))
}

#[test]
fn one_write_batch_reaches_the_player_and_the_trigger_pulses() {
    println!("\n=== SETUP: associate over a pre-hashed schema ===\n");

    let table = pre_hashed_table();
    let (mut store, record) = store_with_candidate();
    let mut bridge = Bridge::new(
        table.clone(),
        PLAYER_TAG,
        PLAYER_INSTANCE,
        BridgeConfig::default(),
    );
    let mut animator = MockAnimator::new();

    bridge.tick(&mut store, &mut animator);
    assert_eq!(
        bridge.tick(&mut store, &mut animator),
        BridgeStatus::Associated
    );
    println!("associated with {}", record);

    println!("\n=== CYCLE 1: the full batch dispatches ===\n");

    write_param(&mut store, record, &table, STANCE, ParamValue::Bool(true));
    write_param(&mut store, record, &table, THROTTLE, ParamValue::Float(0.5));
    write_param(&mut store, record, &table, FIRE, ParamValue::Trigger(true));

    bridge.tick(&mut store, &mut animator);
    assert_eq!(
        animator.calls(),
        &[
            AnimatorCall::SetPlaybackRate(1.0),
            AnimatorCall::SetBool(STANCE, true),
            AnimatorCall::SetFloat(THROTTLE, 0.5),
            AnimatorCall::SetTrigger(FIRE),
        ]
    );
    assert_eq!(animator.bool_value(STANCE), Some(true));
    assert_eq!(animator.float_value(THROTTLE), Some(0.5));
    assert!(animator.trigger_raised(FIRE));

    let buffer = store.param_buffer(&record).expect("buffer attached");
    assert!(
        buffer.iter().all(|cell| !cell.is_dirty()),
        "every cell was consumed by the drain"
    );

    println!("\n=== CYCLE 2: the armed trigger clears, nothing re-consumes ===\n");

    animator.clear_calls();
    bridge.tick(&mut store, &mut animator);
    assert_eq!(
        animator.calls(),
        &[
            AnimatorCall::SetPlaybackRate(1.0),
            AnimatorCall::ResetTrigger(FIRE),
        ]
    );
    assert!(!animator.trigger_raised(FIRE));
    assert_eq!(animator.bool_value(STANCE), Some(true));
    assert_eq!(animator.float_value(THROTTLE), Some(0.5));

    println!("\n=== CYCLE 3: steady state ===\n");

    animator.clear_calls();
    bridge.tick(&mut store, &mut animator);
    assert_eq!(animator.calls(), &[AnimatorCall::SetPlaybackRate(1.0)]);
}
