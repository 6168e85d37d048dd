use thiserror::Error;

use super::basil;
use super::matrix::MemoryMatrix;
use super::params::{Lyra2ParamError, Lyra2Params};
use super::phases::PhaseDriver;
use super::sponge::{Blake2bSponge, EngineError, Sponge};

/// Column count fixed by the [`phs`] entry point.
pub const N_COLS: u32 = 256;

/// Errors that can occur during a Lyra2 derivation.
///
/// Every error triggers a total unwind: no partially-built matrix or
/// partially-absorbed state is ever exposed, and sensitive buffers are
/// zeroized on the failure path exactly as on success.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Lyra2Error {
    /// Invalid cost parameters or key length.
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] Lyra2ParamError),
    /// Password and salt together exceed one matrix row.
    #[error("password and salt exceed one matrix row")]
    InputTooLarge,
    /// The host allocator could not reserve the memory matrix.
    #[error("memory matrix allocation failed")]
    AllocationFailure,
    /// The sponge engine reported a failure.
    #[error("sponge engine failure: {0}")]
    EngineFailure(#[from] EngineError),
}

/// Derives a key with the scheme-wide fixed column count.
///
/// Forwards to [`lyra2`] with `n_rows = mem_cost` and [`N_COLS`] columns.
/// On failure nothing is written to `key` and no state is left behind.
pub fn phs(
    key: &mut [u8],
    password: &[u8],
    salt: &[u8],
    time_cost: u32,
    mem_cost: u32,
) -> Result<(), Lyra2Error> {
    let params = Lyra2Params {
        time_cost,
        n_rows: mem_cost,
        n_cols: N_COLS,
    };
    lyra2(key, password, salt, &params)
}

/// Derives `key.len()` bytes from `password` and `salt` under `params`.
///
/// The output is a pure function of `(password, salt, key.len(), params)`;
/// all five values are absorbed, so two calls differing in any of them
/// produce unrelated keys.
///
/// # Errors
///
/// Returns [`Lyra2Error::InvalidParams`] for degenerate costs or an empty
/// `key`, [`Lyra2Error::InputTooLarge`] when `password ‖ salt` does not fit
/// one matrix row, and [`Lyra2Error::AllocationFailure`] when the matrix
/// cannot be reserved. All checks run before any allocation or engine call.
///
/// # Example
///
/// ```rust, ignore
/// use lyra2::derivation::{Lyra2Params, lyra2};
///
/// let params = Lyra2Params { time_cost: 1, n_rows: 64, n_cols: 64 };
/// let mut key = [0u8; 64];
/// lyra2(&mut key, b"my_password", b"random_salt_16b!", &params).unwrap();
/// ```
pub fn lyra2(
    key: &mut [u8],
    password: &[u8],
    salt: &[u8],
    params: &Lyra2Params,
) -> Result<(), Lyra2Error> {
    let mut engine = Blake2bSponge::new();
    run(&mut engine, key, password, salt, params)
}

/// Entry shared by [`lyra2`] and the tests' instrumented engines.
pub(crate) fn run<S: Sponge>(
    engine: &mut S,
    key: &mut [u8],
    password: &[u8],
    salt: &[u8],
    params: &Lyra2Params,
) -> Result<(), Lyra2Error> {
    params.validate()?;

    if key.is_empty() {
        return Err(Lyra2Error::InvalidParams(Lyra2ParamError::KeyLengthInvalid));
    }

    if password.len() + salt.len() > params.row_len_bytes() {
        return Err(Lyra2Error::InputTooLarge);
    }

    // Acquisition order: staged input, matrix, engine state. Drops unwind
    // in reverse on both exit paths, wiping each buffer exactly once.
    let padded = basil::padded_input(password, salt, key.len(), params);

    let mut matrix = MemoryMatrix::allocate(params.n_rows as usize, params.row_words())
        .map_err(|_| Lyra2Error::AllocationFailure)?;

    PhaseDriver::new(engine, &mut matrix, params).run(&padded, key)?;

    Ok(())
}
