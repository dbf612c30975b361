// Copyright 2025 Irreducible Inc.

//! Word-level primitives shared by the two engine widths.

use std::ops::{BitAnd, BitXor, Not};

use crate::consts;

/// An unsigned word the block engine operates on: `u32` for SHA-224/SHA-256,
/// `u64` for the SHA-384/SHA-512 family.
///
/// Everything that distinguishes the two engine widths lives behind this
/// trait: the round count, the round-constant table, the big-endian codec and
/// the four rotate/shift mixing functions of FIPS 180-4.
pub(crate) trait Word:
	Copy + BitAnd<Output = Self> + BitXor<Output = Self> + Not<Output = Self>
{
	const ZERO: Self;
	/// Word width in bytes.
	const BYTES: usize;
	/// Compression rounds per block, equal to the message schedule length.
	const ROUNDS: usize;
	/// Per-round additive constants.
	const K: &'static [Self];

	/// Reads one word from the first `Self::BYTES` bytes of `bytes`,
	/// big-endian.
	///
	/// Panics if the slice is shorter than the word.
	fn load_be(bytes: &[u8]) -> Self;

	/// Writes the big-endian representation of `self` into all of `out`.
	///
	/// A narrower `out` receives the leading, most significant bytes and the
	/// low-order remainder is dropped; shortened digests are defined by this
	/// left-most-bits truncation. A wider `out` is zero-extended on the left.
	fn store_be(self, out: &mut [u8]);

	fn wrapping_add(self, rhs: Self) -> Self;

	/// Circular right rotation. Rotating by a multiple of the bit width is an
	/// identity, never an invalid shift amount.
	fn rotate_right(self, n: u32) -> Self;

	/// σ0, first schedule-expansion mixer.
	fn small_sigma0(self) -> Self;
	/// σ1, second schedule-expansion mixer.
	fn small_sigma1(self) -> Self;
	/// Σ0, mixes working variable `a` in each compression round.
	fn big_sigma0(self) -> Self;
	/// Σ1, mixes working variable `e` in each compression round.
	fn big_sigma1(self) -> Self;
}

impl Word for u32 {
	const ZERO: Self = 0;
	const BYTES: usize = 4;
	const ROUNDS: usize = 64;
	const K: &'static [Self] = &consts::K256;

	fn load_be(bytes: &[u8]) -> Self {
		Self::from_be_bytes(bytes[..4].try_into().expect("word-sized slice"))
	}

	fn store_be(self, out: &mut [u8]) {
		let be = self.to_be_bytes();
		if let Some(pad) = out.len().checked_sub(4) {
			out[..pad].fill(0);
			out[pad..].copy_from_slice(&be);
		} else {
			out.copy_from_slice(&be[..out.len()]);
		}
	}

	fn wrapping_add(self, rhs: Self) -> Self {
		u32::wrapping_add(self, rhs)
	}

	fn rotate_right(self, n: u32) -> Self {
		u32::rotate_right(self, n)
	}

	fn small_sigma0(self) -> Self {
		self.rotate_right(7) ^ self.rotate_right(18) ^ (self >> 3)
	}

	fn small_sigma1(self) -> Self {
		self.rotate_right(17) ^ self.rotate_right(19) ^ (self >> 10)
	}

	fn big_sigma0(self) -> Self {
		self.rotate_right(2) ^ self.rotate_right(13) ^ self.rotate_right(22)
	}

	fn big_sigma1(self) -> Self {
		self.rotate_right(6) ^ self.rotate_right(11) ^ self.rotate_right(25)
	}
}

impl Word for u64 {
	const ZERO: Self = 0;
	const BYTES: usize = 8;
	const ROUNDS: usize = 80;
	const K: &'static [Self] = &consts::K512;

	fn load_be(bytes: &[u8]) -> Self {
		Self::from_be_bytes(bytes[..8].try_into().expect("word-sized slice"))
	}

	fn store_be(self, out: &mut [u8]) {
		let be = self.to_be_bytes();
		if let Some(pad) = out.len().checked_sub(8) {
			out[..pad].fill(0);
			out[pad..].copy_from_slice(&be);
		} else {
			out.copy_from_slice(&be[..out.len()]);
		}
	}

	fn wrapping_add(self, rhs: Self) -> Self {
		u64::wrapping_add(self, rhs)
	}

	fn rotate_right(self, n: u32) -> Self {
		u64::rotate_right(self, n)
	}

	fn small_sigma0(self) -> Self {
		self.rotate_right(1) ^ self.rotate_right(8) ^ (self >> 7)
	}

	fn small_sigma1(self) -> Self {
		self.rotate_right(19) ^ self.rotate_right(61) ^ (self >> 6)
	}

	fn big_sigma0(self) -> Self {
		self.rotate_right(28) ^ self.rotate_right(34) ^ self.rotate_right(39)
	}

	fn big_sigma1(self) -> Self {
		self.rotate_right(14) ^ self.rotate_right(18) ^ self.rotate_right(41)
	}
}
