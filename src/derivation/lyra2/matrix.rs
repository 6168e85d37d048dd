//! Memory matrix ownership and lifecycle.
//!
//! The matrix is a single contiguous allocation of `n_rows × n_cols` sponge
//! blocks, owned for exactly one derivation call. Allocation failure is
//! reported instead of aborting, and the whole buffer is wiped before it is
//! returned to the allocator.

use std::collections::TryReserveError;

use zeroize::Zeroize;

use super::sponge::RATE_WORDS;

/// Row-major working matrix of 12-word blocks.
pub(crate) struct MemoryMatrix {
    words: Vec<u64>,
    row_words: usize,
}

impl MemoryMatrix {
    /// Reserves and zero-initializes `n_rows × row_words` words.
    ///
    /// Callers validate the size arithmetic beforehand; exhaustion of the
    /// host allocator surfaces as an error here.
    pub(crate) fn allocate(n_rows: usize, row_words: usize) -> Result<Self, TryReserveError> {
        let len = n_rows * row_words;
        let mut words = Vec::new();
        words.try_reserve_exact(len)?;
        words.resize(len, 0u64);

        Ok(Self { words, row_words })
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.row_words + col * RATE_WORDS
    }

    /// Copies out one block. Returning by value keeps the `row == rowa`
    /// duplexing case well-defined.
    #[inline]
    pub(crate) fn block(&self, row: usize, col: usize) -> [u64; RATE_WORDS] {
        let start = self.index(row, col);
        self.words[start..start + RATE_WORDS].try_into().unwrap()
    }

    #[inline]
    pub(crate) fn write_block(&mut self, row: usize, col: usize, block: &[u64; RATE_WORDS]) {
        let start = self.index(row, col);
        self.words[start..start + RATE_WORDS].copy_from_slice(block);
    }

    #[inline]
    pub(crate) fn xor_block(&mut self, row: usize, col: usize, block: &[u64; RATE_WORDS]) {
        let start = self.index(row, col);
        self.words[start..start + RATE_WORDS]
            .iter_mut()
            .zip(block.iter())
            .for_each(|(word, input)| *word ^= input);
    }
}

impl Drop for MemoryMatrix {
    fn drop(&mut self) {
        self.words.zeroize();
    }
}
