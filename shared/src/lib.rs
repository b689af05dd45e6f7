//! # Animsync Shared
//! Data types shared between simulation-side producers and the animsync
//! bridge: typed parameter cells and buffers, the schema table mapping
//! stable name hashes to dense indices, and the store surface the bridge
//! consumes.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod name_hash;

mod param;
mod schema;
mod store;

pub use param::{ParamBuffer, ParamKind, ParamValue, ValueCell};
pub use schema::{IdentifierTable, ParamId, ParamSchema, SchemaEntry, SchemaError};
pub use store::{
    BridgeState, DiscoveryTag, InstanceId, MemoryStore, RecordId, SimStore, StoreError, TagId,
};
