//! Parameter definitions and validation for Lyra2.
//!
//! This module defines the configurable cost parameters and validates them
//! before any memory is reserved.

use thiserror::Error;

use super::sponge::RATE_WORDS;

/// Configuration parameters for the Lyra2 algorithm.
///
/// These parameters control the memory and time cost of the derivation,
/// allowing the security level to be tuned for the target hardware and
/// threat model. All three are absorbed as part of the basil, so two calls
/// differing in any parameter produce unrelated keys.
///
/// # Recommended Values
///
/// - `n_rows`: pick so that `n_rows × n_cols × 96` bytes matches the memory
///   budget per guess you want to impose on an attacker.
/// - `n_cols`: 256 for the fixed-shape [`phs`](super::core::phs) entry.
/// - `time_cost`: 1 is the scheme baseline; raise it to grow running time
///   without growing memory.
#[derive(Clone, Debug)]
pub struct Lyra2Params {
    /// Number of Wandering passes over the matrix (minimum 1).
    pub time_cost: u32,
    /// Number of matrix rows (minimum 2; Setup seeds rows 0 and 1).
    pub n_rows: u32,
    /// Number of 96-byte blocks per row (minimum 1).
    pub n_cols: u32,
}

/// Errors that can occur during parameter validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Lyra2ParamError {
    /// Time cost must be at least 1.
    #[error("time cost must be at least 1")]
    TooFewPasses,
    /// The matrix needs at least the two Setup-seeded rows.
    #[error("row count must be at least 2")]
    TooFewRows,
    /// Rows must hold at least one sponge block.
    #[error("column count must be at least 1")]
    TooFewCols,
    /// The requested matrix size does not fit the address space.
    #[error("matrix size overflows the address space")]
    MatrixTooLarge,
    /// The output key must be at least one byte long.
    #[error("key length must be at least 1")]
    KeyLengthInvalid,
}

impl Lyra2Params {
    pub(crate) fn validate(&self) -> Result<(), Lyra2ParamError> {
        if self.time_cost < 1 {
            return Err(Lyra2ParamError::TooFewPasses);
        }

        if self.n_rows < 2 {
            return Err(Lyra2ParamError::TooFewRows);
        }

        if self.n_cols < 1 {
            return Err(Lyra2ParamError::TooFewCols);
        }

        (self.n_cols as usize)
            .checked_mul(RATE_WORDS)
            .and_then(|row| row.checked_mul(self.n_rows as usize))
            .and_then(|words| words.checked_mul(8))
            .ok_or(Lyra2ParamError::MatrixTooLarge)?;

        Ok(())
    }

    /// Row width in 64-bit words.
    #[inline]
    pub(crate) fn row_words(&self) -> usize {
        self.n_cols as usize * RATE_WORDS
    }

    /// Row width in bytes; also the upper bound on `password ‖ salt`.
    #[inline]
    pub(crate) fn row_len_bytes(&self) -> usize {
        self.row_words() * 8
    }
}

impl Default for Lyra2Params {
    /// Default parameters: 1024 rows × 256 columns (24 MiB), 1 pass.
    fn default() -> Self {
        Self {
            time_cost: 1,
            n_rows: 1024,
            n_cols: 256,
        }
    }
}
