use animsync_shared::BridgeState;

/// Tunables for one bridge instance.
#[derive(Clone, Debug)]
pub struct BridgeConfig {
    /// Bridge-state record attached to the simulation record when the
    /// handshake completes. Simulation systems own the record afterwards.
    pub initial_state: BridgeState,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            initial_state: BridgeState::default(),
        }
    }
}
