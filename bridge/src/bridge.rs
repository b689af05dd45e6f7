use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use log::error;

use animsync_shared::{IdentifierTable, InstanceId, ParamBuffer, SimStore, TagId};

use crate::animator::Animator;
use crate::config::BridgeConfig;
use crate::error::HandshakeFault;
use crate::handshake::{Handshake, HandshakeState};
use crate::synchronizer::Synchronizer;

/// Coarse lifecycle of a bridge, as reported by [`Bridge::status`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeStatus {
    Searching,
    Associating,
    Associated,
    Failed,
    Cancelled,
}

#[derive(Debug)]
enum Phase<E> {
    Handshaking(Handshake<E>),
    Synced(Synchronizer<E>),
    // association succeeded but setup could not finish
    Failed(HandshakeFault),
}

/// Per-instance entry point tying the handshake and the synchronizer
/// together.
///
/// Call [`Self::tick`] once per presentation frame. While the handshake is
/// unresolved, a tick advances the protocol one step; the tick that
/// resolves it also attaches the configured
/// [`BridgeState`](animsync_shared::BridgeState) and a freshly allocated
/// parameter buffer to the matched record. Every tick after that runs one
/// synchronizer cycle.
#[derive(Debug)]
pub struct Bridge<E> {
    table: Arc<IdentifierTable>,
    tag: TagId,
    instance: InstanceId,
    config: BridgeConfig,
    phase: Phase<E>,
}

impl<E: Copy + Eq + Hash + Debug> Bridge<E> {
    pub fn new(
        table: Arc<IdentifierTable>,
        tag: TagId,
        instance: InstanceId,
        config: BridgeConfig,
    ) -> Self {
        Self {
            table,
            tag,
            instance,
            config,
            phase: Phase::Handshaking(Handshake::new(tag, instance)),
        }
    }

    pub fn tag(&self) -> TagId {
        self.tag
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Runs one engine step and reports where the bridge stands afterwards.
    pub fn tick<S, A>(&mut self, store: &mut S, animator: &mut A) -> BridgeStatus
    where
        S: SimStore<Entity = E>,
        A: Animator,
    {
        let matched = match &mut self.phase {
            Phase::Handshaking(handshake) => match handshake.poll(store) {
                HandshakeState::Associated { record } => Some(record),
                _ => None,
            },
            Phase::Synced(synchronizer) => {
                synchronizer.sync(store, animator);
                None
            }
            Phase::Failed(_) => None,
        };

        if let Some(record) = matched {
            self.complete_association(record, store);
        }
        self.status()
    }

    pub fn status(&self) -> BridgeStatus {
        match &self.phase {
            Phase::Handshaking(handshake) => match handshake.state() {
                HandshakeState::Searching => BridgeStatus::Searching,
                HandshakeState::Associating => BridgeStatus::Associating,
                HandshakeState::Associated { .. } => BridgeStatus::Associated,
                HandshakeState::Failed => BridgeStatus::Failed,
                HandshakeState::Cancelled => BridgeStatus::Cancelled,
            },
            Phase::Synced(_) => BridgeStatus::Associated,
            Phase::Failed(_) => BridgeStatus::Failed,
        }
    }

    /// The terminal handshake fault, if the bridge has failed.
    pub fn fault(&self) -> Option<&HandshakeFault> {
        match &self.phase {
            Phase::Handshaking(handshake) => handshake.fault(),
            Phase::Synced(_) => None,
            Phase::Failed(fault) => Some(fault),
        }
    }

    /// The associated simulation record, once the handshake has completed.
    pub fn record(&self) -> Option<E> {
        match &self.phase {
            Phase::Synced(synchronizer) => Some(synchronizer.record()),
            Phase::Handshaking(_) | Phase::Failed(_) => None,
        }
    }

    /// The running synchronizer, for fault inspection.
    pub fn synchronizer(&self) -> Option<&Synchronizer<E>> {
        match &self.phase {
            Phase::Synced(synchronizer) => Some(synchronizer),
            Phase::Handshaking(_) | Phase::Failed(_) => None,
        }
    }

    /// Abandons an in-flight handshake. Does nothing once associated.
    pub fn cancel(&mut self) {
        if let Phase::Handshaking(handshake) = &mut self.phase {
            handshake.cancel();
        }
    }

    fn complete_association<S>(&mut self, record: E, store: &mut S)
    where
        S: SimStore<Entity = E>,
    {
        let buffer = ParamBuffer::allocate(&self.table);
        let attached = store
            .attach_bridge_state(&record, self.config.initial_state)
            .and_then(|_| store.attach_param_buffer(&record, buffer));
        match attached {
            Ok(()) => {
                self.phase = Phase::Synced(Synchronizer::new(self.table.clone(), record));
            }
            Err(_) => {
                let fault = HandshakeFault::RecordLost {
                    tag: self.tag,
                    instance: self.instance,
                };
                error!("{}", fault);
                self.phase = Phase::Failed(fault);
            }
        }
    }
}
