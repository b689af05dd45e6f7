use std::fmt::Debug;
use std::hash::Hash;

mod error;
mod memory;
mod state;
mod tag;

pub use error::StoreError;
pub use memory::{MemoryStore, RecordId};
pub use state::BridgeState;
pub use tag::{DiscoveryTag, InstanceId, TagId};

use crate::param::ParamBuffer;

/// The simulation-store surface the bridge consumes.
///
/// An integration implements this over its own entity/component store;
/// [`MemoryStore`] is the reference implementation that tests and demos
/// drive. Mutations against a specific record return [`StoreError`] when
/// the record is gone; lookups return `Option` instead.
pub trait SimStore {
    /// Handle to one simulation record.
    type Entity: Copy + Eq + Hash + Debug;

    /// Number of live records carrying a discovery tag. The handshake's
    /// Searching state polls this.
    fn tagged_count(&self) -> usize;

    /// Clears `out` and fills it with every live tagged record. Fill style
    /// so a polling caller can reuse its scratch allocation.
    fn collect_tagged(&self, out: &mut Vec<(Self::Entity, DiscoveryTag)>);

    /// Whether `entity` still exists.
    fn contains_record(&self, entity: &Self::Entity) -> bool;

    /// Attaches (or replaces) the bridge-state record on `entity`.
    fn attach_bridge_state(
        &mut self,
        entity: &Self::Entity,
        state: BridgeState,
    ) -> Result<(), StoreError>;

    /// Reads `entity`'s bridge state.
    fn bridge_state(&self, entity: &Self::Entity) -> Option<BridgeState>;

    /// Attaches (or replaces) the parameter buffer on `entity`.
    fn attach_param_buffer(
        &mut self,
        entity: &Self::Entity,
        buffer: ParamBuffer,
    ) -> Result<(), StoreError>;

    /// Shared access to `entity`'s parameter buffer.
    fn param_buffer(&self, entity: &Self::Entity) -> Option<&ParamBuffer>;

    /// Exclusive access to `entity`'s parameter buffer.
    fn param_buffer_mut(&mut self, entity: &Self::Entity) -> Option<&mut ParamBuffer>;
}
