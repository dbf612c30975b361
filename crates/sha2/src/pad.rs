// Copyright 2025 Irreducible Inc.

//! Merkle–Damgård padding and block segmentation.

use crate::word::Word;

/// Scratch large enough for the padded tail of either width: the marker byte
/// and length suffix never spill past two 128-byte blocks.
const TAIL_SCRATCH: usize = 256;

/// Feeds `f` every block of the padded message, in order.
///
/// Blocks fully covered by `msg` are passed straight out of it. The block
/// receiving the tail gets the `0x80` marker byte and zero fill; the bit
/// length of the original message lands big-endian in the last `2 * W::BYTES`
/// bytes of the final block, which is an extra all-padding block whenever the
/// marker plus suffix do not fit next to the tail.
pub(crate) fn each_block<W: Word>(msg: &[u8], mut f: impl FnMut(&[u8])) {
	let block_len = 16 * W::BYTES;
	let suffix_len = 2 * W::BYTES;

	let mut blocks = msg.chunks_exact(block_len);
	for block in &mut blocks {
		f(block);
	}

	let tail = blocks.remainder();
	let mut scratch = [0u8; TAIL_SCRATCH];
	scratch[..tail.len()].copy_from_slice(tail);
	scratch[tail.len()] = 0x80;

	let padded_len = if tail.len() + 1 + suffix_len <= block_len {
		block_len
	} else {
		2 * block_len
	};
	let bits = msg.len() as u128 * 8;
	scratch[padded_len - suffix_len..padded_len]
		.copy_from_slice(&bits.to_be_bytes()[16 - suffix_len..]);

	for block in scratch[..padded_len].chunks_exact(block_len) {
		f(block);
	}
}
