// Copyright 2025 Irreducible Inc.

//! One-shot digest entry points, one per SHA-2 variant.
//!
//! Each function consumes the complete message in a single call and returns
//! the variant's fixed-size digest. A variant is nothing more than a preset
//! handed to the generic engine: word width, initial hash values and digest
//! length.

use crate::{consts, engine};

/// Computes the SHA-256 digest of `msg`.
///
/// ```
/// use fips180_sha2::sha256;
/// use hex_literal::hex;
///
/// assert_eq!(
///     sha256(b"abc"),
///     hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
/// );
/// ```
pub fn sha256(msg: impl AsRef<[u8]>) -> [u8; 32] {
	engine::digest(consts::SHA256_IV, msg.as_ref())
}

/// Computes the SHA-224 digest of `msg`.
pub fn sha224(msg: impl AsRef<[u8]>) -> [u8; 28] {
	engine::digest(consts::SHA224_IV, msg.as_ref())
}

/// Computes the SHA-512 digest of `msg`.
pub fn sha512(msg: impl AsRef<[u8]>) -> [u8; 64] {
	engine::digest(consts::SHA512_IV, msg.as_ref())
}

/// Computes the SHA-384 digest of `msg`.
pub fn sha384(msg: impl AsRef<[u8]>) -> [u8; 48] {
	engine::digest(consts::SHA384_IV, msg.as_ref())
}

/// Computes the SHA-512/224 digest of `msg`.
///
/// The digest splits the fourth state word: it keeps the word's leading four
/// bytes, per the left-most-bits truncation rule of FIPS 180-4.
pub fn sha512_224(msg: impl AsRef<[u8]>) -> [u8; 28] {
	engine::digest(consts::SHA512_224_IV, msg.as_ref())
}

/// Computes the SHA-512/256 digest of `msg`.
pub fn sha512_256(msg: impl AsRef<[u8]>) -> [u8; 32] {
	engine::digest(consts::SHA512_256_IV, msg.as_ref())
}
