mod error;
mod identifier_table;
mod param_id;
mod param_schema;

pub use error::SchemaError;
pub use identifier_table::IdentifierTable;
pub use param_id::ParamId;
pub use param_schema::{ParamSchema, SchemaEntry};
