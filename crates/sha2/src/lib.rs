// Copyright 2025 Irreducible Inc.

//! The SHA-2 family of hash functions from FIPS 180-4.
//!
//! One-shot implementations of SHA-224, SHA-256, SHA-384, SHA-512,
//! SHA-512/224 and SHA-512/256 over a single generic block engine. Each entry
//! point consumes the whole message and returns the variant's fixed-size
//! digest; hashing allocates nothing and touches no global state, so
//! concurrent computations need no coordination.

mod consts;
mod digest;
mod engine;
mod pad;
mod word;

pub use digest::*;
