use crate::param::ParamKind;
use crate::schema::ParamId;

/// One declared parameter: identity, kind, and flow direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchemaEntry {
    pub id: ParamId,
    pub kind: ParamKind,
    /// When set, the value flows presentation -> simulation instead of the
    /// default direction.
    pub is_return_channel: bool,
}

impl SchemaEntry {
    /// Declares a simulation -> presentation parameter.
    pub const fn new(id: ParamId, kind: ParamKind) -> Self {
        Self {
            id,
            kind,
            is_return_channel: false,
        }
    }

    /// Declares a presentation -> simulation parameter.
    pub const fn return_channel(id: ParamId, kind: ParamKind) -> Self {
        Self {
            id,
            kind,
            is_return_channel: true,
        }
    }
}

/// Ordered parameter declarations. An entry's position in the list is the
/// dense index the [`IdentifierTable`](crate::IdentifierTable) will hand
/// out for it.
///
/// Build one by hand with the `add_*` methods, or collect generated
/// [`SchemaEntry`] consts, then construct the table:
///
/// ```
/// use animsync_shared::{IdentifierTable, ParamKind, ParamSchema};
///
/// let mut schema = ParamSchema::new();
/// schema
///     .add_param("Move", ParamKind::Float)
///     .add_param("Jump", ParamKind::Trigger)
///     .add_return_channel("Speed", ParamKind::Float);
///
/// let table = IdentifierTable::build(&schema).unwrap();
/// assert_eq!(table.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParamSchema {
    entries: Vec<SchemaEntry>,
}

impl ParamSchema {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Wraps an already-built entry list, e.g. a generated const table.
    pub fn from_entries(entries: impl IntoIterator<Item = SchemaEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Declares `name` as a simulation -> presentation parameter of `kind`.
    pub fn add_param(&mut self, name: &str, kind: ParamKind) -> &mut Self {
        self.entries
            .push(SchemaEntry::new(ParamId::from_name(name), kind));
        self
    }

    /// Declares `name` as a presentation -> simulation parameter of `kind`.
    pub fn add_return_channel(&mut self, name: &str, kind: ParamKind) -> &mut Self {
        self.entries
            .push(SchemaEntry::return_channel(ParamId::from_name(name), kind));
        self
    }

    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
