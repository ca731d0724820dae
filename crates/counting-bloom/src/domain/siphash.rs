//! SipHash keyed pseudorandom function
//!
//! Reference: Aumasson & Bernstein, "SipHash: a fast short-input PRF" (2012)
//!
//! SipHash-c-d runs `c` compression rounds per 8-byte message block and `d`
//! finalization rounds. The filter uses SipHash-2-4; SipHash-1-3 is provided
//! for callers trading margin for speed.
//!
//! All arithmetic wraps modulo 2^64.

use std::fmt;

use crate::error::FilterError;

/// Length of a SipHash key in bytes.
pub const KEY_LEN: usize = 16;

/// Initialization constants: "somepseudorandomlygeneratedbytes" as four
/// little-endian words.
const INIT_V0: u64 = 0x736f_6d65_7073_6575;
const INIT_V1: u64 = 0x646f_7261_6e64_6f6d;
const INIT_V2: u64 = 0x6c79_6765_6e65_7261;
const INIT_V3: u64 = 0x7465_6462_7974_6573;

/// 128-bit secret key for SipHash.
///
/// The bytes never appear in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct HashKey([u8; KEY_LEN]);

impl HashKey {
    /// Wrap raw key bytes.
    pub const fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes, for `KeyedHasher` implementations.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashKey(<redacted>)")
    }
}

impl From<[u8; KEY_LEN]> for HashKey {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl TryFrom<&[u8]> for HashKey {
    type Error = FilterError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| FilterError::InvalidKeyLength { len: bytes.len() })?;
        Ok(Self(bytes))
    }
}

/// SipHash with `C` compression rounds and `D` finalization rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SipHash<const C: usize, const D: usize>;

/// The reference SipHash-2-4.
pub type SipHash24 = SipHash<2, 4>;

/// The faster SipHash-1-3 variant.
pub type SipHash13 = SipHash<1, 3>;

impl<const C: usize, const D: usize> SipHash<C, D> {
    pub const fn new() -> Self {
        Self
    }

    /// Compute the 64-bit digest of `message` under `key`.
    pub fn digest(message: &[u8], key: &[u8; KEY_LEN]) -> u64 {
        let k0 = load_u64_le(&key[..8]);
        let k1 = load_u64_le(&key[8..]);
        let mut state = State::new(k0, k1);

        let blocks = message.chunks_exact(8);
        let tail = blocks.remainder();
        for block in blocks {
            state.compress::<C>(load_u64_le(block));
        }

        // Length mod 256 in the top byte, leftover bytes below it.
        let last = ((message.len() as u64) << 56) | load_u64_le(tail);
        state.compress::<C>(last);

        state.finish::<D>()
    }
}

/// SipHash-2-4 of `message` under `key`.
pub fn siphash24(message: &[u8], key: &[u8; KEY_LEN]) -> u64 {
    SipHash24::digest(message, key)
}

/// Little-endian load of up to 8 bytes; missing high bytes are zero.
#[inline]
fn load_u64_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | (u64::from(b) << (8 * i)))
}

struct State {
    v0: u64,
    v1: u64,
    v2: u64,
    v3: u64,
}

impl State {
    fn new(k0: u64, k1: u64) -> Self {
        Self {
            v0: k0 ^ INIT_V0,
            v1: k1 ^ INIT_V1,
            v2: k0 ^ INIT_V2,
            v3: k1 ^ INIT_V3,
        }
    }

    #[inline]
    fn compress<const ROUNDS: usize>(&mut self, m: u64) {
        self.v3 ^= m;
        for _ in 0..ROUNDS {
            self.sipround();
        }
        self.v0 ^= m;
    }

    fn finish<const ROUNDS: usize>(mut self) -> u64 {
        self.v2 ^= 0xff;
        for _ in 0..ROUNDS {
            self.sipround();
        }
        self.v0 ^ self.v1 ^ self.v2 ^ self.v3
    }

    #[inline]
    fn sipround(&mut self) {
        self.v0 = self.v0.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(13);
        self.v1 ^= self.v0;
        self.v0 = self.v0.rotate_left(32);
        self.v2 = self.v2.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(16);
        self.v3 ^= self.v2;
        self.v0 = self.v0.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(21);
        self.v3 ^= self.v0;
        self.v2 = self.v2.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(17);
        self.v1 ^= self.v2;
        self.v2 = self.v2.rotate_left(32);
    }
}
