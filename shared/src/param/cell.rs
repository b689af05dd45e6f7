use crate::param::{ParamKind, ParamValue};

/// A single slot in the parameter buffer: one typed payload plus a dirty
/// flag marking "written and not yet consumed".
///
/// The dirty flag is the handoff token between the two layers. Simulation
/// producers call the `write` methods, the presentation-side synchronizer
/// calls [`Self::try_consume`], and a value written once is delivered at
/// most once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueCell {
    value: ParamValue,
    dirty: bool,
}

impl ValueCell {
    /// A clean cell holding the zero value of `kind`.
    pub const fn new(kind: ParamKind) -> Self {
        Self {
            value: kind.zero_value(),
            dirty: false,
        }
    }

    /// Stores `value` and marks the cell dirty.
    ///
    /// Overwrites any not-yet-consumed payload: the last write wins and
    /// still costs a single consume. No value diffing takes place, so
    /// re-writing an identical payload re-marks the cell dirty.
    ///
    /// Writing a variant different from the cell's schema kind is not
    /// checked here. The consumer dispatches on the stored variant, so a
    /// mismatched write reaches the wrong presentation setter. Keep
    /// producers honest.
    pub fn write(&mut self, value: ParamValue) {
        self.value = value;
        self.dirty = true;
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write(ParamValue::Bool(value));
    }

    /// Raises (`true`) or clears (`false`) a one-shot trigger.
    pub fn write_trigger(&mut self, fired: bool) {
        self.write(ParamValue::Trigger(fired));
    }

    pub fn write_float(&mut self, value: f32) {
        self.write(ParamValue::Float(value));
    }

    pub fn write_int(&mut self, value: i32) {
        self.write(ParamValue::Int(value));
    }

    /// Takes the pending value, if any.
    ///
    /// Clears the dirty flag. For a Trigger payload the stored flag also
    /// resets to `false`, so the pulse cannot be observed twice. Consuming
    /// a clean cell yields `None` and changes nothing.
    pub fn try_consume(&mut self) -> Option<ParamValue> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        let taken = self.value;
        if let ParamValue::Trigger(fired) = &mut self.value {
            *fired = false;
        }
        Some(taken)
    }

    /// Reads the stored payload without consuming it.
    pub fn peek(&self) -> ParamValue {
        self.value
    }

    /// The kind currently stored in the cell.
    pub fn kind(&self) -> ParamKind {
        self.value.kind()
    }

    /// Whether a write is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
