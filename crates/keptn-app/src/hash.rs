//! FNV-1a helpers.
//!
//! The `fnv` crate only ships the 64-bit variant as a [`std::hash::Hasher`],
//! the 32-bit one is small enough to live here.

use std::hash::Hasher;

use fnv::FnvHasher;

const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;

pub fn fnv1a_32(bytes: &[u8]) -> u32 {
	bytes.iter().fold(FNV32_OFFSET_BASIS, |hash, &b| {
		(hash ^ u32::from(b)).wrapping_mul(FNV32_PRIME)
	})
}

pub fn fnv1a_64(bytes: &[u8]) -> u64 {
	let mut hasher = FnvHasher::default();
	hasher.write(bytes);
	hasher.finish()
}
