use std::sync::Arc;

use animsync_bridge::{Bridge, BridgeConfig, BridgeStatus};
use animsync_shared::{
    DiscoveryTag, IdentifierTable, InstanceId, MemoryStore, ParamId, ParamKind, ParamSchema,
    ParamValue, RecordId, SimStore, TagId,
};

use crate::mock_animator::MockAnimator;

pub const PLAYER_TAG: TagId = TagId::from_name("Player");
pub const PLAYER_INSTANCE: InstanceId = InstanceId::new(1);

pub const MOVE: ParamId = ParamId::from_name("Move");
pub const GROUNDED: ParamId = ParamId::from_name("Grounded");
pub const JUMP: ParamId = ParamId::from_name("Jump");
pub const SPEED: ParamId = ParamId::from_name("Speed");

/// Standard locomotion schema used across scenario tests: a float, a bool,
/// a trigger, and a float return channel.
pub fn locomotion_table() -> Arc<IdentifierTable> {
    let mut schema = ParamSchema::new();
    schema
        .add_param("Move", ParamKind::Float)
        .add_param("Grounded", ParamKind::Bool)
        .add_param("Jump", ParamKind::Trigger)
        .add_return_channel("Speed", ParamKind::Float);
    Arc::new(IdentifierTable::build(&schema).expect("locomotion schema is valid"))
}

/// Store holding one record tagged for [`PLAYER_TAG`] / [`PLAYER_INSTANCE`].
pub fn store_with_candidate() -> (MemoryStore, RecordId) {
    let mut store = MemoryStore::new();
    let record = store.spawn_tagged(DiscoveryTag::new(PLAYER_TAG, PLAYER_INSTANCE));
    (store, record)
}

/// Bridge for the standard player instance over `table`.
pub fn player_bridge(table: Arc<IdentifierTable>) -> Bridge<RecordId> {
    Bridge::new(table, PLAYER_TAG, PLAYER_INSTANCE, BridgeConfig::default())
}

/// Mock whose controller exposes the `Speed` float that the locomotion
/// table declares as a return channel.
pub fn locomotion_animator() -> MockAnimator {
    let mut animator = MockAnimator::new();
    animator.expose_float(SPEED, 0.0);
    animator
}

/// Writes `value` into the record's cell for `id`, as the simulation does
/// between exchange cycles.
pub fn write_param(
    store: &mut MemoryStore,
    record: RecordId,
    table: &IdentifierTable,
    id: ParamId,
    value: ParamValue,
) {
    let index = table.index_of(id).expect("id is declared in the table");
    let buffer = store
        .param_buffer_mut(&record)
        .expect("record carries a parameter buffer");
    buffer.cell_mut(index).write(value);
}

/// Drives `bridge` through its handshake: one tick to spot the candidates,
/// one to associate.
pub fn associate(
    bridge: &mut Bridge<RecordId>,
    store: &mut MemoryStore,
    animator: &mut MockAnimator,
) {
    bridge.tick(store, animator);
    let status = bridge.tick(store, animator);
    assert_eq!(
        status,
        BridgeStatus::Associated,
        "handshake should complete against a prepared store"
    );
}
