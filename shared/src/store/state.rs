/// Simulation-owned control flags for one bridged instance.
///
/// Attached to the simulation record when the handshake completes, rewritten
/// by simulation systems whenever they like, and read back by the
/// synchronizer at the top of every cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BridgeState {
    /// Suspends presentation playback and parameter delivery while true.
    /// Values written during the disabled window stay buffered and flush on
    /// the first re-enabled cycle.
    pub disabled: bool,
    /// Advisory flag for physics-driven animation takeover. Exposed to the
    /// caller; the engine attaches no behavior to it.
    pub ragdoll: bool,
    /// Playback rate multiplier, applied every enabled cycle.
    pub speed_scale: f32,
}

impl Default for BridgeState {
    fn default() -> Self {
        Self {
            disabled: false,
            ragdoll: false,
            speed_scale: 1.0,
        }
    }
}
