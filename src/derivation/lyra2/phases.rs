//! Phase sequencing for a single derivation call.
//!
//! The controller drives the sponge engine through the fixed phase order
//! Absorbing → Setup → Wandering → Wrap-up → Squeeze. Execution is strictly
//! sequential: the scheme's security rests on enforced sequential memory
//! latency, so no phase or row operation runs concurrently with another.
//! Any engine failure propagates immediately; the matrix and state are
//! released by their owners on that path like on the success path.

use super::matrix::MemoryMatrix;
use super::params::Lyra2Params;
use super::sponge::{BLOCK_LEN_BYTES, EngineError, RATE_WORDS, Sponge};

/// One in-flight derivation: exclusive borrow of the engine and matrix.
pub(crate) struct PhaseDriver<'a, S: Sponge> {
    engine: &'a mut S,
    matrix: &'a mut MemoryMatrix,
    n_rows: usize,
    n_cols: usize,
    time_cost: u64,
}

impl<'a, S: Sponge> PhaseDriver<'a, S> {
    pub(crate) fn new(
        engine: &'a mut S,
        matrix: &'a mut MemoryMatrix,
        params: &Lyra2Params,
    ) -> Self {
        Self {
            engine,
            matrix,
            n_rows: params.n_rows as usize,
            n_cols: params.n_cols as usize,
            time_cost: u64::from(params.time_cost),
        }
    }

    /// Runs all phases in order and writes the derived key into `key`.
    pub(crate) fn run(&mut self, padded: &[u8], key: &mut [u8]) -> Result<(), EngineError> {
        self.engine.initialize()?;
        self.absorbing(padded)?;
        self.setup()?;
        let rowa = self.wandering()?;
        self.wrapup(rowa)?;
        self.engine.squeeze(key)
    }

    /// Feeds each padded input block to the sponge, in order.
    fn absorbing(&mut self, padded: &[u8]) -> Result<(), EngineError> {
        for chunk in padded.chunks_exact(BLOCK_LEN_BYTES) {
            let mut block = [0u64; RATE_WORDS];
            for (word, bytes) in block.iter_mut().zip(chunk.chunks_exact(8)) {
                *word = u64::from_le_bytes(bytes.try_into().unwrap());
            }
            self.engine.absorb(&block)?;
        }
        Ok(())
    }

    /// Materializes the full matrix, exactly once, before any Wandering step.
    ///
    /// Rows 0 and 1 come straight from the post-absorb state by reduced
    /// squeezing; every later row is the reduced duplex of its predecessor.
    fn setup(&mut self) -> Result<(), EngineError> {
        for row in 0..2 {
            for col in 0..self.n_cols {
                let mut block = [0u64; RATE_WORDS];
                self.engine.reduced_squeeze(&mut block)?;
                self.matrix.write_block(row, col, &block);
            }
        }

        for row in 2..self.n_rows {
            self.duplex_row(row - 1, row)?;
        }
        Ok(())
    }

    /// `time_cost × n_rows` data-dependent revisitation steps.
    ///
    /// Each step derives `rowa` from the current sponge state by reduction
    /// modulo `n_rows` (a modulo, not a bitmask: `n_rows` need not be a
    /// power of two), duplexes `M[rowa]` into the current row, and advances
    /// the current-row cursor round-robin. Returns the final `rowa`.
    fn wandering(&mut self) -> Result<usize, EngineError> {
        let mut row = 0usize;
        let mut rowa = 0usize;
        for _ in 0..self.time_cost * self.n_rows as u64 {
            rowa = (self.engine.row_index_word() % self.n_rows as u64) as usize;
            self.duplex_row(rowa, row)?;
            row = (row + 1) % self.n_rows;
        }
        Ok(rowa)
    }

    /// Entangles the last visited row into the final state, full-strength.
    fn wrapup(&mut self, rowa: usize) -> Result<(), EngineError> {
        for col in 0..self.n_cols {
            let block = self.matrix.block(rowa, col);
            self.engine.absorb(&block)?;
        }
        Ok(())
    }

    /// Reduced-duplexes row `src` into row `dst`, column by column.
    ///
    /// `src == dst` is legal during Wandering: each column block is read
    /// before its replacement is XORed back.
    fn duplex_row(&mut self, src: usize, dst: usize) -> Result<(), EngineError> {
        for col in 0..self.n_cols {
            let block = self.matrix.block(src, col);
            let rate = self.engine.duplex(&block, true)?;
            self.matrix.xor_block(dst, col, &rate);
        }
        Ok(())
    }
}
