//! Lyra2 memory-hard password hashing scheme.
//!
//! Lyra2 derives a fixed-length key from a password and salt while forcing
//! the evaluator — including an attacker with parallel hardware — to keep a
//! large, sequentially-dependent working set in memory for the duration of
//! the computation. Memory cost (`n_rows`), row width (`n_cols`) and time
//! cost are tunable independently.
//!
//! # Security Properties
//!
//! - **Memory hardness**: the matrix of `n_rows × n_cols` sponge blocks must
//!   be resident; rows are revisited in a data-dependent order, so discarding
//!   them trades memory for prohibitive recomputation.
//! - **Time hardness**: the Wandering phase performs `time_cost × n_rows`
//!   duplexing steps over the matrix.
//! - **Sequentiality**: every step depends on the full sponge state, which
//!   in turn depends on every previous step; the scheme has no internal
//!   parallel decomposition by design.
//!
//! # Algorithm Overview
//!
//! 1. **Absorb**: pad password ‖ salt ‖ basil (the six scheme parameters)
//!    into whole sponge blocks and absorb them in order.
//! 2. **Setup**: materialize rows 0 and 1 by reduced-round squeezing, then
//!    each further row by reduced-round duplexing of the previous row.
//! 3. **Wandering**: `time_cost × n_rows` times, pick a pseudorandom row
//!    `rowa` from the sponge state and duplex it into the current row, which
//!    advances round-robin.
//! 4. **Wrap-up**: absorb the last visited row with the full-round sponge,
//!    then squeeze the requested number of key bytes.
//!
//! # Memory Organization
//!
//! Memory is a row-major matrix of 96-byte blocks:
//! - **Rows**: `n_rows` rows, the unit of the data-dependent visitation.
//! - **Columns**: `n_cols` blocks per row, processed in order by each
//!   row-level sponge operation.
//!
//! The matrix, the sponge state, and the staged password are zeroized on
//! every exit path, success or failure.

pub(crate) mod basil;
pub mod core;
pub(crate) mod matrix;
pub(crate) mod params;
pub(crate) mod phases;
pub(crate) mod sponge;
