//! Duplex sponge engine driving the memory matrix.
//!
//! The sponge is a 16-word (1024-bit) state split into a 12-word rate
//! partition, which input blocks are XORed into and output blocks are read
//! from, and a 4-word capacity partition that is never directly exposed.
//! The permutation is the BLAKE2b round function with no message words:
//! twelve rounds for the full-strength operations (absorb, squeeze) and a
//! single round for the reduced operations that fill and revisit matrix
//! rows.

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Sponge state width in 64-bit words.
pub(crate) const STATE_WORDS: usize = 16;
/// Rate partition width in 64-bit words (`b = 12`, 768 bits).
pub(crate) const RATE_WORDS: usize = 12;
/// Block length used for padding, absorbing and squeezing.
pub(crate) const BLOCK_LEN_BYTES: usize = RATE_WORDS * 8;

/// Rounds of the permutation for absorb and squeeze.
const FULL_ROUNDS: usize = 12;
/// Rounds for the row-filling and row-revisiting operations.
const REDUCED_ROUNDS: usize = 1;

/// Failure reported by a sponge engine.
///
/// The in-process engine never fails, but the capability contract is
/// fallible so that an engine backed by an accelerator or other fallible
/// substrate propagates its errors through the phase controller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("sponge engine operation failed")]
pub struct EngineError;

/// Capabilities the phase controller requires from a sponge engine.
///
/// All operations are block-granular; row-level operations are per-column
/// loops in the phase controller, so the engine stays independent of the
/// matrix layout.
pub trait Sponge {
    /// Resets the state to all-zero words.
    fn initialize(&mut self) -> Result<(), EngineError>;

    /// XORs `block` into the rate partition, then permutes (full rounds).
    fn absorb(&mut self, block: &[u64; RATE_WORDS]) -> Result<(), EngineError>;

    /// Copies the rate partition into `out`, then permutes (reduced rounds).
    fn reduced_squeeze(&mut self, out: &mut [u64; RATE_WORDS]) -> Result<(), EngineError>;

    /// XORs `block` into the rate, permutes, and returns the new rate.
    ///
    /// The returned block entangles the absorbed input with the accumulated
    /// state history; this is the memory-hardening primitive.
    fn duplex(
        &mut self,
        block: &[u64; RATE_WORDS],
        reduced: bool,
    ) -> Result<[u64; RATE_WORDS], EngineError>;

    /// Emits exactly `out.len()` bytes, permuting between rate-sized chunks.
    fn squeeze(&mut self, out: &mut [u8]) -> Result<(), EngineError>;

    /// First rate word, used to derive the next row index in Wandering.
    fn row_index_word(&self) -> u64;
}

/// In-process sponge engine built on the BLAKE2b round function.
///
/// The state is zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Blake2bSponge {
    state: [u64; STATE_WORDS],
}

impl Blake2bSponge {
    pub(crate) fn new() -> Self {
        Self {
            state: [0u64; STATE_WORDS],
        }
    }

    #[inline]
    fn rounds(&mut self, n: usize) {
        for _ in 0..n {
            round(&mut self.state);
        }
    }
}

impl Sponge for Blake2bSponge {
    fn initialize(&mut self) -> Result<(), EngineError> {
        self.state = [0u64; STATE_WORDS];
        Ok(())
    }

    fn absorb(&mut self, block: &[u64; RATE_WORDS]) -> Result<(), EngineError> {
        for (word, input) in self.state.iter_mut().zip(block.iter()) {
            *word ^= input;
        }
        self.rounds(FULL_ROUNDS);
        Ok(())
    }

    fn reduced_squeeze(&mut self, out: &mut [u64; RATE_WORDS]) -> Result<(), EngineError> {
        out.copy_from_slice(&self.state[..RATE_WORDS]);
        self.rounds(REDUCED_ROUNDS);
        Ok(())
    }

    fn duplex(
        &mut self,
        block: &[u64; RATE_WORDS],
        reduced: bool,
    ) -> Result<[u64; RATE_WORDS], EngineError> {
        for (word, input) in self.state.iter_mut().zip(block.iter()) {
            *word ^= input;
        }
        self.rounds(if reduced { REDUCED_ROUNDS } else { FULL_ROUNDS });

        let mut rate = [0u64; RATE_WORDS];
        rate.copy_from_slice(&self.state[..RATE_WORDS]);
        Ok(rate)
    }

    fn squeeze(&mut self, out: &mut [u8]) -> Result<(), EngineError> {
        let mut remaining = out;
        loop {
            let take = remaining.len().min(BLOCK_LEN_BYTES);
            let (chunk, rest) = remaining.split_at_mut(take);
            for (slot, word) in chunk.chunks_mut(8).zip(self.state.iter()) {
                slot.copy_from_slice(&word.to_le_bytes()[..slot.len()]);
            }
            remaining = rest;
            if remaining.is_empty() {
                return Ok(());
            }
            self.rounds(FULL_ROUNDS);
        }
    }

    #[inline]
    fn row_index_word(&self) -> u64 {
        self.state[0]
    }
}

/// G mixing function (BLAKE2b quarter-round, message words omitted).
///
/// ```text
/// a = a + b        d = (d ⊕ a) >>> 32
/// c = c + d        b = (b ⊕ c) >>> 24
/// a = a + b        d = (d ⊕ a) >>> 16
/// c = c + d        b = (b ⊕ c) >>> 63
/// ```
#[inline(always)]
fn g(a: u64, b: u64, c: u64, d: u64) -> (u64, u64, u64, u64) {
    let a = a.wrapping_add(b);
    let d = (d ^ a).rotate_right(32);

    let c = c.wrapping_add(d);
    let b = (b ^ c).rotate_right(24);

    let a = a.wrapping_add(b);
    let d = (d ^ a).rotate_right(16);

    let c = c.wrapping_add(d);
    let b = (b ^ c).rotate_right(63);

    (a, b, c, d)
}

/// One round of the permutation: G applied to the state viewed as a 4×4
/// matrix of 64-bit words, first along columns, then along diagonals.
#[inline(always)]
fn round(v: &mut [u64; STATE_WORDS]) {
    (v[0], v[4], v[8], v[12]) = g(v[0], v[4], v[8], v[12]);
    (v[1], v[5], v[9], v[13]) = g(v[1], v[5], v[9], v[13]);
    (v[2], v[6], v[10], v[14]) = g(v[2], v[6], v[10], v[14]);
    (v[3], v[7], v[11], v[15]) = g(v[3], v[7], v[11], v[15]);

    (v[0], v[5], v[10], v[15]) = g(v[0], v[5], v[10], v[15]);
    (v[1], v[6], v[11], v[12]) = g(v[1], v[6], v[11], v[12]);
    (v[2], v[7], v[8], v[13]) = g(v[2], v[7], v[8], v[13]);
    (v[3], v[4], v[9], v[14]) = g(v[3], v[4], v[9], v[14]);
}
