//! Per-cycle parameter pump between one simulation record and one animator.
//!
//! Each call to [`Synchronizer::sync`] runs one presentation-frame cycle:
//!
//! 1. Read the record's `BridgeState`; while disabled, suspend playback and
//!    stop.
//! 2. Apply `speed_scale` to the playback rate, every cycle, no diffing.
//! 3. Clear triggers pulsed on the previous enabled cycle.
//! 4. Drain dirty cells from the buffer into the animator, dispatching by
//!    kind. Return-channel cells are excluded; they flow the other way.
//! 5. Read return-channel values from the animator back into the buffer.
//!
//! Faults degrade: a missing return-channel parameter disables that channel
//! after one warning, and a destroyed simulation record turns further
//! cycles into a warned-once no-op. Contract violations (a buffer whose
//! length disagrees with the table) panic instead.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use log::{trace, warn};

use animsync_shared::{
    IdentifierTable, ParamBuffer, ParamId, ParamKind, ParamValue, SchemaError, SimStore,
};

use crate::animator::Animator;
use crate::error::SyncFault;

/// Pumps one associated record's parameter buffer into an [`Animator`],
/// and return-channel values back the other way.
#[derive(Debug)]
pub struct Synchronizer<E> {
    table: Arc<IdentifierTable>,
    record: E,
    // triggers raised last cycle, to be cleared at the top of the next
    // enabled cycle
    armed_triggers: Vec<ParamId>,
    faulted_channels: HashSet<usize>,
    faults: Vec<SyncFault>,
    playback_suspended: bool,
    record_lost: bool,
}

impl<E: Copy + Eq + Hash + Debug> Synchronizer<E> {
    /// Binds `record` to `table` without touching the store.
    ///
    /// The caller guarantees that the buffer attached to `record` was
    /// allocated from `table`; [`Self::bind`] checks instead.
    pub fn new(table: Arc<IdentifierTable>, record: E) -> Self {
        Self {
            table,
            record,
            armed_triggers: Vec::new(),
            faulted_channels: HashSet::new(),
            faults: Vec::new(),
            playback_suspended: false,
            record_lost: false,
        }
    }

    /// Binds `record` to `table`, checking that the buffer already attached
    /// to it in `store` has the table's length.
    pub fn bind<S>(
        table: Arc<IdentifierTable>,
        record: E,
        store: &S,
    ) -> Result<Self, SchemaError>
    where
        S: SimStore<Entity = E>,
    {
        let buffer_len = store.param_buffer(&record).map_or(0, ParamBuffer::len);
        table.check_buffer_len(buffer_len)?;
        Ok(Self::new(table, record))
    }

    /// The simulation record this synchronizer pumps.
    pub fn record(&self) -> E {
        self.record
    }

    /// Faults reported so far, oldest first. Each was logged once when it
    /// first occurred.
    pub fn faults(&self) -> &[SyncFault] {
        &self.faults
    }

    /// Runs one cycle.
    pub fn sync<S, A>(&mut self, store: &mut S, animator: &mut A)
    where
        S: SimStore<Entity = E>,
        A: Animator,
    {
        if self.record_lost {
            return;
        }
        let Some(state) = store.bridge_state(&self.record) else {
            let fault = SyncFault::RecordLost;
            warn!("record {:?}: {}", self.record, fault);
            self.faults.push(fault);
            self.record_lost = true;
            return;
        };

        if state.disabled {
            if !self.playback_suspended {
                trace!("record {:?}: playback suspended", self.record);
                animator.set_playback_enabled(false);
                self.playback_suspended = true;
            }
            return;
        }
        if self.playback_suspended {
            trace!("record {:?}: playback resumed", self.record);
            animator.set_playback_enabled(true);
            self.playback_suspended = false;
        }

        animator.set_playback_rate(state.speed_scale);

        for id in self.armed_triggers.drain(..) {
            animator.reset_trigger(id);
        }

        let record = self.record;
        let Some(buffer) = store.param_buffer_mut(&record) else {
            panic!(
                "associated record {:?} has no parameter buffer. The buffer attached at association must live as long as the record.",
                record
            );
        };
        assert_eq!(
            buffer.len(),
            self.table.len(),
            "parameter buffer length diverged from identifier table length"
        );

        self.drain_params(buffer, animator);
        self.read_return_channels(buffer, animator);
    }

    fn drain_params<A>(&mut self, buffer: &mut ParamBuffer, animator: &mut A)
    where
        A: Animator,
    {
        for index in 0..buffer.len() {
            // return channels flow the other way; their cells are never
            // drained toward the animator
            if self.table.is_return_channel(index) {
                continue;
            }
            let Some(value) = buffer.cell_mut(index).try_consume() else {
                continue;
            };
            let id = self.table.id_at(index);
            match value {
                ParamValue::Bool(value) => animator.set_bool(id, value),
                ParamValue::Int(value) => animator.set_int(id, value),
                ParamValue::Float(value) => animator.set_float(id, value),
                ParamValue::Trigger(true) => {
                    animator.set_trigger(id);
                    self.armed_triggers.push(id);
                }
                // an explicit clear; nothing to arm
                ParamValue::Trigger(false) => animator.reset_trigger(id),
            }
        }
    }

    fn read_return_channels<A>(&mut self, buffer: &mut ParamBuffer, animator: &A)
    where
        A: Animator,
    {
        for &index in self.table.return_channels() {
            if self.faulted_channels.contains(&index) {
                continue;
            }
            let id = self.table.id_at(index);
            let value = match self.table.kind_at(index) {
                ParamKind::Bool => animator.get_bool(id).map(ParamValue::Bool),
                ParamKind::Int => animator.get_int(id).map(ParamValue::Int),
                ParamKind::Float => animator.get_float(id).map(ParamValue::Float),
                // rejected at table construction
                ParamKind::Trigger => unreachable!("trigger return channels cannot be built"),
            };
            match value {
                Some(value) => buffer.cell_mut(index).write(value),
                None => {
                    let fault = SyncFault::MissingReturnChannel { id };
                    warn!("record {:?}: {}", self.record, fault);
                    self.faults.push(fault);
                    self.faulted_channels.insert(index);
                }
            }
        }
    }
}
