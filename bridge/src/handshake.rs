use std::fmt::Debug;
use std::hash::Hash;

use log::{error, info, trace};

use animsync_shared::{DiscoveryTag, InstanceId, SimStore, TagId};

use crate::error::HandshakeFault;

/// Where a handshake currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandshakeState<E> {
    /// Waiting for any tagged record to appear in the store.
    Searching,
    /// Tagged candidates exist; the next pass scans them for an exact match.
    Associating,
    /// Permanently bound to one simulation record.
    Associated { record: E },
    /// Terminal failure; see [`Handshake::fault`].
    Failed,
    /// Torn down by the caller before completing.
    Cancelled,
}

/// One instance's discovery protocol: poll the store until a record
/// carrying this instance's exact (tag, instance) identity shows up, then
/// bind to it permanently.
///
/// The protocol is cooperative: [`Self::poll`] performs one state step and
/// returns. Candidates are re-collected from the live store on every
/// Associating pass, never cached across passes, so records appearing or
/// vanishing between passes are always observed. With candidates present
/// but none matching, the protocol fails terminally instead of retrying
/// forever; with the candidate set gone again, it drops back to Searching.
#[derive(Debug)]
pub struct Handshake<E> {
    tag: TagId,
    instance: InstanceId,
    state: HandshakeState<E>,
    // live-set scratch, refilled each Associating pass, dropped on exit
    candidates: Vec<(E, DiscoveryTag)>,
    fault: Option<HandshakeFault>,
}

impl<E: Copy + Eq + Hash + Debug> Handshake<E> {
    pub fn new(tag: TagId, instance: InstanceId) -> Self {
        Self {
            tag,
            instance,
            state: HandshakeState::Searching,
            candidates: Vec::new(),
            fault: None,
        }
    }

    pub fn tag(&self) -> TagId {
        self.tag
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn state(&self) -> HandshakeState<E> {
        self.state
    }

    /// The terminal fault, if the protocol has failed.
    pub fn fault(&self) -> Option<&HandshakeFault> {
        self.fault.as_ref()
    }

    /// Runs one protocol step against the live store.
    pub fn poll<S>(&mut self, store: &S) -> HandshakeState<E>
    where
        S: SimStore<Entity = E>,
    {
        match self.state {
            HandshakeState::Searching => {
                if store.tagged_count() > 0 {
                    trace!(
                        "instance {} found tagged candidates, scanning next pass",
                        self.instance
                    );
                    self.state = HandshakeState::Associating;
                }
            }
            HandshakeState::Associating => {
                store.collect_tagged(&mut self.candidates);
                if self.candidates.is_empty() {
                    // the set vanished before we could scan it
                    self.state = HandshakeState::Searching;
                } else if let Some(record) = self.find_match() {
                    info!(
                        "instance {} associated with simulation record {:?}",
                        self.instance, record
                    );
                    self.state = HandshakeState::Associated { record };
                    self.release_scratch();
                } else {
                    let fault = HandshakeFault::NoMatchingCandidate {
                        tag: self.tag,
                        instance: self.instance,
                        candidates: self.candidates.len(),
                    };
                    error!("{}", fault);
                    self.fault = Some(fault);
                    self.state = HandshakeState::Failed;
                    self.release_scratch();
                }
            }
            HandshakeState::Associated { .. }
            | HandshakeState::Failed
            | HandshakeState::Cancelled => {}
        }
        self.state
    }

    /// Abandons an unfinished handshake and releases the query scratch.
    /// Does nothing once the protocol has reached a terminal state.
    pub fn cancel(&mut self) {
        match self.state {
            HandshakeState::Searching | HandshakeState::Associating => {
                self.state = HandshakeState::Cancelled;
                self.release_scratch();
            }
            HandshakeState::Associated { .. }
            | HandshakeState::Failed
            | HandshakeState::Cancelled => {}
        }
    }

    fn find_match(&self) -> Option<E> {
        self.candidates
            .iter()
            .find(|(_, tag)| tag.matches(self.tag, self.instance))
            .map(|(record, _)| *record)
    }

    fn release_scratch(&mut self) {
        self.candidates = Vec::new();
    }
}
