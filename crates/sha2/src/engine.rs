// Copyright 2025 Irreducible Inc.

//! The generic block engine: message-schedule expansion, the compression
//! rounds and digest extraction, shared by all six variants.

use crate::{pad, word::Word};

/// Schedule length of the wider engine; the 32-bit engine uses a prefix.
const MAX_SCHEDULE: usize = 80;

/// Decodes the 16 words of `block` and extends them to the full message
/// schedule.
fn expand_schedule<W: Word>(block: &[u8], schedule: &mut [W]) {
	for (i, word) in schedule.iter_mut().take(16).enumerate() {
		*word = W::load_be(&block[i * W::BYTES..]);
	}
	for i in 16..W::ROUNDS {
		let mixed = schedule[i - 16]
			.wrapping_add(schedule[i - 15].small_sigma0())
			.wrapping_add(schedule[i - 7])
			.wrapping_add(schedule[i - 2].small_sigma1());
		schedule[i] = mixed;
	}
}

/// Runs the compression rounds of one block over a working copy of `state`,
/// then folds the result back in with wraparound adds.
fn compress<W: Word>(state: &mut [W; 8], schedule: &[W]) {
	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

	for (&k, &w) in W::K.iter().zip(schedule) {
		let choice = (e & f) ^ (!e & g);
		let temp1 = h
			.wrapping_add(e.big_sigma1())
			.wrapping_add(choice)
			.wrapping_add(k)
			.wrapping_add(w);
		let majority = (a & b) ^ (a & c) ^ (b & c);
		let temp2 = a.big_sigma0().wrapping_add(majority);

		h = g;
		g = f;
		f = e;
		e = d.wrapping_add(temp1);
		d = c;
		c = b;
		b = a;
		a = temp1.wrapping_add(temp2);
	}

	for (acc, word) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
		*acc = acc.wrapping_add(word);
	}
}

/// Packs the leading `N` bytes of the final state into the digest, big-endian
/// word by word. A digest length that is not a word multiple cuts the last
/// retained word after its most significant bytes.
fn finalize<W: Word, const N: usize>(state: &[W; 8]) -> [u8; N] {
	let mut digest = [0u8; N];
	for (chunk, word) in digest.chunks_mut(W::BYTES).zip(state) {
		word.store_be(chunk);
	}
	digest
}

/// Hashes `msg` starting from `iv`, producing an `N`-byte digest.
pub(crate) fn digest<W: Word, const N: usize>(iv: [W; 8], msg: &[u8]) -> [u8; N] {
	let mut state = iv;
	let mut schedule = [W::ZERO; MAX_SCHEDULE];
	pad::each_block::<W>(msg, |block| {
		expand_schedule(block, &mut schedule[..W::ROUNDS]);
		compress(&mut state, &schedule[..W::ROUNDS]);
	});
	finalize(&state)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn schedule_expansion_of_the_abc_block() {
		let mut block = [0u8; 64];
		block[..3].copy_from_slice(b"abc");
		block[3] = 0x80;
		block[63] = 24;

		let mut schedule = [0u32; 64];
		expand_schedule(&block, &mut schedule);

		// First expanded words from the FIPS 180-4 SHA-256("abc") example.
		assert_eq!(schedule[15], 24);
		assert_eq!(schedule[16], 0x6162_6380);
		assert_eq!(schedule[17], 0x000f_0000);
	}

	#[test]
	fn split_word_digest_keeps_high_bytes() {
		let mut state = [0u64; 8];
		state[3] = 0x11223344aabbccdd;
		let digest: [u8; 28] = finalize(&state);
		assert_eq!(digest[24..], [0x11, 0x22, 0x33, 0x44]);
	}
}
