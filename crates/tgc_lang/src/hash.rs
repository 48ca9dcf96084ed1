//! FNV-1a hashing of entry keys
//!

const OFFSET_BASIS: u32 = 0x811C_9DC5;
const PRIME: u32 = 0x0100_0193;

/// Compute the 32-bit FNV-1a digest of a byte sequence.
///
/// This is the digest stored alongside every key in a LANG file. It is a pure function of the
/// input bytes, with no seed.
pub fn fnv1a(data: &[u8]) -> u32 {
    data.iter().fold(OFFSET_BASIS, |digest, byte| {
        (digest ^ u32::from(*byte)).wrapping_mul(PRIME)
    })
}
