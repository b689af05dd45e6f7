use std::fmt;

use crate::name_hash;

/// Stable identifier for a named animation parameter.
///
/// The id is the FNV-1a/32 hash of the parameter's name, computable at
/// compile time, so schema tables emitted by offline tooling as Rust
/// consts carry the same ids the runtime derives from strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(u32);

impl ParamId {
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

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
