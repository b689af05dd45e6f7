use crate::param::ValueCell;
use crate::schema::IdentifierTable;

/// The per-instance exchange surface: one [`ValueCell`] per schema entry,
/// ordered by dense index.
///
/// Allocated when a handshake completes and attached to the matched
/// simulation record, then destroyed with it. Both layers address cells by
/// the dense indices handed out by the [`IdentifierTable`], so an
/// out-of-range index can only mean the table and the buffer come from
/// different schemas. That is a programming error; the indexed accessors
/// panic rather than degrade.
#[derive(Clone, Debug)]
pub struct ParamBuffer {
    cells: Box<[ValueCell]>,
}

impl ParamBuffer {
    /// Allocates one clean, zeroed cell per table entry, kinds following
    /// the schema declaration order.
    pub fn allocate(table: &IdentifierTable) -> Self {
        let cells = (0..table.len())
            .map(|index| ValueCell::new(table.kind_at(index)))
            .collect();
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `index`.
    ///
    /// Panics if `index` is out of range. Check first.
    pub fn cell(&self, index: usize) -> &ValueCell {
        let len = self.cells.len();
        let Some(cell) = self.cells.get(index) else {
            panic!(
                "parameter index {} out of range for buffer of length {}. Table and buffer disagree on the schema.",
                index, len
            );
        };
        cell
    }

    /// Exclusive access to the cell at `index`.
    ///
    /// Panics if `index` is out of range. Check first.
    pub fn cell_mut(&mut self, index: usize) -> &mut ValueCell {
        let len = self.cells.len();
        let Some(cell) = self.cells.get_mut(index) else {
            panic!(
                "parameter index {} out of range for buffer of length {}. Table and buffer disagree on the schema.",
                index, len
            );
        };
        cell
    }

    /// Non-panicking lookup.
    pub fn get(&self, index: usize) -> Option<&ValueCell> {
        self.cells.get(index)
    }

    /// Non-panicking exclusive lookup.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut ValueCell> {
        self.cells.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValueCell> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ValueCell> {
        self.cells.iter_mut()
    }
}
