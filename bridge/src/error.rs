use thiserror::Error;

use animsync_shared::{InstanceId, ParamId, TagId};

/// Terminal handshake failures.
///
/// Logged once via `log::error!` when they occur; afterwards the fault is
/// retrievable from the owning [`Bridge`](crate::Bridge), which stays
/// failed. Almost always a schema/spawn mismatch in the host application.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HandshakeFault {
    /// Tagged candidates exist, but none carries this instance's exact
    /// (tag, instance) identity.
    #[error("no record among {candidates} tagged candidate(s) matches tag {tag} instance {instance}")]
    NoMatchingCandidate {
        tag: TagId,
        instance: InstanceId,
        candidates: usize,
    },

    /// The matched record disappeared before setup could finish.
    #[error("record matching tag {tag} instance {instance} vanished before setup finished")]
    RecordLost { tag: TagId, instance: InstanceId },
}

/// Degradable per-cycle faults.
///
/// Logged once via `log::warn!`; the synchronizer carries on without the
/// faulted piece and records the fault for inspection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyncFault {
    /// A return channel names a parameter the animator does not expose.
    /// The channel is skipped from then on.
    #[error("animator exposes no parameter {id} for a return channel; channel disabled")]
    MissingReturnChannel { id: ParamId },

    /// The associated simulation record was destroyed. Further cycles are
    /// no-ops.
    #[error("simulation record for the associated instance no longer exists")]
    RecordLost,
}
