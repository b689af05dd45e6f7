use std::collections::HashMap;
use std::fmt;

use log::warn;

use crate::param::ParamBuffer;
use crate::store::{BridgeState, DiscoveryTag, SimStore, StoreError};

/// Handle into a [`MemoryStore`]. Sequential, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "record-{}", self.0)
    }
}

#[derive(Debug, Default)]
struct Record {
    tag: Option<DiscoveryTag>,
    bridge_state: Option<BridgeState>,
    params: Option<ParamBuffer>,
}

/// HashMap-backed reference store.
///
/// Simulation-side code uses the inherent methods to spawn records and
/// mutate control state; the bridge only ever sees the [`SimStore`]
/// surface.
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: u64,
    records: HashMap<RecordId, Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns an untagged record, invisible to handshakes.
    pub fn spawn(&mut self) -> RecordId {
        self.insert_record(Record::default())
    }

    /// Spawns a record carrying `tag`, making it a handshake candidate.
    pub fn spawn_tagged(&mut self, tag: DiscoveryTag) -> RecordId {
        self.insert_record(Record {
            tag: Some(tag),
            ..Record::default()
        })
    }

    /// Removes `record` and everything attached to it. Returns whether the
    /// record existed.
    pub fn despawn(&mut self, record: &RecordId) -> bool {
        let existed = self.records.remove(record).is_some();
        if !existed {
            warn!("Despawn of {}, which does not exist in this store", record);
        }
        existed
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Simulation-side exclusive access to a record's bridge state.
    pub fn bridge_state_mut(&mut self, record: &RecordId) -> Option<&mut BridgeState> {
        self.records
            .get_mut(record)
            .and_then(|record| record.bridge_state.as_mut())
    }

    fn insert_record(&mut self, record: Record) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.records.insert(id, record);
        id
    }

    fn record_mut(
        &mut self,
        record: &RecordId,
        context: &'static str,
    ) -> Result<&mut Record, StoreError> {
        self.records
            .get_mut(record)
            .ok_or(StoreError::RecordDoesNotExist { context })
    }
}

impl SimStore for MemoryStore {
    type Entity = RecordId;

    fn tagged_count(&self) -> usize {
        self.records
            .values()
            .filter(|record| record.tag.is_some())
            .count()
    }

    fn collect_tagged(&self, out: &mut Vec<(RecordId, DiscoveryTag)>) {
        out.clear();
        for (id, record) in &self.records {
            if let Some(tag) = record.tag {
                out.push((*id, tag));
            }
        }
    }

    fn contains_record(&self, entity: &RecordId) -> bool {
        self.records.contains_key(entity)
    }

    fn attach_bridge_state(
        &mut self,
        entity: &RecordId,
        state: BridgeState,
    ) -> Result<(), StoreError> {
        self.record_mut(entity, "attach bridge state")?.bridge_state = Some(state);
        Ok(())
    }

    fn bridge_state(&self, entity: &RecordId) -> Option<BridgeState> {
        self.records
            .get(entity)
            .and_then(|record| record.bridge_state)
    }

    fn attach_param_buffer(
        &mut self,
        entity: &RecordId,
        buffer: ParamBuffer,
    ) -> Result<(), StoreError> {
        self.record_mut(entity, "attach parameter buffer")?.params = Some(buffer);
        Ok(())
    }

    fn param_buffer(&self, entity: &RecordId) -> Option<&ParamBuffer> {
        self.records
            .get(entity)
            .and_then(|record| record.params.as_ref())
    }

    fn param_buffer_mut(&mut self, entity: &RecordId) -> Option<&mut ParamBuffer> {
        self.records
            .get_mut(entity)
            .and_then(|record| record.params.as_mut())
    }
}
