use std::collections::HashMap;

use crate::param::ParamKind;
use crate::schema::{ParamId, ParamSchema, SchemaError};

/// Immutable mapping between stable parameter ids and the dense indices
/// `[0, N)` that address the per-instance buffer.
///
/// Built once from a [`ParamSchema`]; the dense index of an entry is its
/// position in the declaration list, so indices are contiguous with no
/// gaps. The table is the shared source of truth for buffer layout:
/// producers resolve ids through [`Self::index_of`] and the synchronizer
/// walks indices in order. After construction the table never changes and
/// is typically shared behind an `Arc`.
#[derive(Debug)]
pub struct IdentifierTable {
    ids: Vec<ParamId>,
    kinds: Vec<ParamKind>,
    indices: HashMap<ParamId, usize>,
    return_channels: Vec<usize>,
}

impl IdentifierTable {
    /// Builds the table, assigning dense indices in declaration order.
    ///
    /// Fails on a duplicate id (two entries would fight over one cell) and
    /// on a Trigger entry flagged as a return channel (triggers self-reset
    /// when read, so reading one back cannot work).
    pub fn build(schema: &ParamSchema) -> Result<Self, SchemaError> {
        let entries = schema.entries();
        let mut ids = Vec::with_capacity(entries.len());
        let mut kinds = Vec::with_capacity(entries.len());
        let mut indices = HashMap::with_capacity(entries.len());
        let mut return_channels = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            if indices.insert(entry.id, index).is_some() {
                return Err(SchemaError::DuplicateIdentifier { id: entry.id });
            }
            if entry.is_return_channel {
                if let ParamKind::Trigger = entry.kind {
                    return Err(SchemaError::TriggerReturnChannel { id: entry.id });
                }
                return_channels.push(index);
            }
            ids.push(entry.id);
            kinds.push(entry.kind);
        }

        Ok(Self {
            ids,
            kinds,
            indices,
            return_channels,
        })
    }

    /// Number of entries; also the length of every buffer allocated from
    /// this table.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolves an id to its dense index.
    pub fn index_of(&self, id: ParamId) -> Option<usize> {
        self.indices.get(&id).copied()
    }

    /// The id at `index`.
    ///
    /// Panics if `index` is out of range. Check first.
    pub fn id_at(&self, index: usize) -> ParamId {
        let len = self.ids.len();
        let Some(id) = self.ids.get(index) else {
            panic!(
                "dense index {} out of range for identifier table of length {}.",
                index, len
            );
        };
        *id
    }

    /// The declared kind at `index`.
    ///
    /// Panics if `index` is out of range. Check first.
    pub fn kind_at(&self, index: usize) -> ParamKind {
        let len = self.kinds.len();
        let Some(kind) = self.kinds.get(index) else {
            panic!(
                "dense index {} out of range for identifier table of length {}.",
                index, len
            );
        };
        *kind
    }

    /// Dense indices whose values flow presentation -> simulation, in
    /// declaration order.
    pub fn return_channels(&self) -> &[usize] {
        &self.return_channels
    }

    /// Whether the entry at `index` is a return channel.
    pub fn is_return_channel(&self, index: usize) -> bool {
        // built in ascending order
        self.return_channels.binary_search(&index).is_ok()
    }

    /// Checks a buffer length against this table before binding the two.
    pub fn check_buffer_len(&self, buffer_len: usize) -> Result<(), SchemaError> {
        if buffer_len != self.len() {
            return Err(SchemaError::BufferLengthMismatch {
                table_len: self.len(),
                buffer_len,
            });
        }
        Ok(())
    }
}
