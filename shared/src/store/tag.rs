use std::fmt;

use crate::name_hash;

/// Stable identifier for a character archetype, hashed from its name the
/// same way parameter ids are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TagId(u32);

impl TagId {
    /// Wraps a pre-computed hash, e.g. from a generated table.
    pub const fn new(hash: u32) -> Self {
        Self(hash)
    }

    /// Hashes `name` into its stable id.
    pub const fn from_name(name: &str) -> Self {
        Self(name_hash::fnv1a_32(name.as_bytes()))
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Identity of one presentation-layer instance, e.g. a spawned character's
/// object id. Assigned by the host application; the engine only compares it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The marker a simulation record carries so the matching presentation
/// instance can find it during the handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiscoveryTag {
    pub tag: TagId,
    pub instance: InstanceId,
}

impl DiscoveryTag {
    pub const fn new(tag: TagId, instance: InstanceId) -> Self {
        Self { tag, instance }
    }

    /// Exact identity match, as used by the handshake's Associating scan.
    pub fn matches(&self, tag: TagId, instance: InstanceId) -> bool {
        self.tag == tag && self.instance == instance
    }
}
