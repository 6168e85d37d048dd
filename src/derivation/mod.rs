//! Key derivation functions exposed by the crate.
//!
//! Currently includes Lyra2 with a pure-Rust sponge engine.

pub mod lyra2;

/// Re-exports of the Lyra2 entry points and their parameter/error types.
pub use lyra2::core::{Lyra2Error, N_COLS, lyra2, phs};
pub use lyra2::params::{Lyra2ParamError, Lyra2Params};
pub use lyra2::sponge::EngineError;
