//! # Animsync Bridge
//! The presentation-side half of the engine: a handshake that discovers the
//! simulation record matching one presentation instance, and a synchronizer
//! that pumps typed parameter values between the record's buffer and an
//! animation player every frame. [`Bridge`] ties the two together behind a
//! single per-instance `tick`.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod animator;
mod bridge;
mod config;
mod error;
mod handshake;
mod synchronizer;

pub use animator::Animator;
pub use bridge::{Bridge, BridgeStatus};
pub use config::BridgeConfig;
pub use error::{HandshakeFault, SyncFault};
pub use handshake::{Handshake, HandshakeState};
pub use synchronizer::Synchronizer;
