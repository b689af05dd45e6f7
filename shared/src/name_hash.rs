//! Stable 32-bit name hashing.
//!
//! Parameter and tag identity must survive process restarts and codegen
//! round trips, so identities are content hashes of names rather than
//! interned indices. FNV-1a is small enough to run in `const` position,
//! which lets generated schema tables live in ordinary Rust source and
//! still agree with ids the runtime derives from strings.

const FNV1A_OFFSET_BASIS_32: u32 = 0x811c_9dc5;
const FNV1A_PRIME_32: u32 = 16_777_619;

/// Hashes `bytes` with FNV-1a/32. Usable in `const` contexts.
pub const fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV1A_OFFSET_BASIS_32;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV1A_PRIME_32);
        i += 1;
    }
    hash
}
