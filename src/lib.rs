//! Memory-hard password hashing.
//!
//! This crate implements the Lyra2 password hashing scheme: it derives a
//! fixed-length key from a password and salt while forcing every evaluator
//! to hold a large, sequentially-dependent memory matrix for the whole
//! computation. It is intended for brute-force-resistant password storage
//! and key derivation.
//!
//! The focus is on **clarity, predictability, and auditability**: the byte
//! layout of the absorbed input, the phase ordering, and the lifetime of
//! every sensitive buffer are explicit, because each of them is part of the
//! scheme and changing any of them changes every derived key.
//!
//! # Module overview
//!
//! - `derivation`
//!   The Lyra2 scheme itself: parameter validation, basil assembly and
//!   padding, the memory matrix, the duplex sponge engine, and the
//!   Setup/Wandering/Wrap-up phase controller.
//!
//! # Design goals
//!
//! - Single-call, in-process derivation with no persisted or shared state
//! - Guaranteed zeroization of the matrix, sponge state, and password
//!   staging buffer on every exit path
//! - Minimal and explicit APIs
//!
//! This crate is not a general sponge-construction library and not a KDF
//! framework; it provides exactly one scheme with a fixed wire layout.

pub mod derivation;
