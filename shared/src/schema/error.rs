use thiserror::Error;

use crate::schema::ParamId;

/// Construction-time schema failures.
///
/// All of these abort table or binding creation; none are recoverable at
/// runtime, since a bad schema cannot produce a coherent buffer layout.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two schema entries hash to the same identifier.
    #[error("duplicate parameter identifier {id} in schema")]
    DuplicateIdentifier { id: ParamId },

    /// A Trigger entry was flagged as a return channel. Triggers self-reset
    /// when read, so reading one back cannot work.
    #[error("parameter {id} is a Trigger and cannot be a return channel")]
    TriggerReturnChannel { id: ParamId },

    /// A buffer of the wrong length was bound to this table.
    #[error("buffer length {buffer_len} does not match identifier table length {table_len}")]
    BufferLengthMismatch { table_len: usize, buffer_len: usize },
}
