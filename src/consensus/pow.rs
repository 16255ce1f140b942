//! Proof-of-work hashing and 256-bit target arithmetic.
//!
//! Block headers are hashed with scrypt (N=1024, r=1, p=1) using the 80-byte
//! header as both password and salt. Hashes compare against targets as
//! little-endian 256-bit integers.

use bitcoin::hashes::Hash;
use bitcoin::util::uint::Uint256;
use scrypt::{scrypt, Params};

use crate::blockdata::block::{BlockHash, BlockHeader};
use crate::consensus::encode::serialize;
use crate::errors::*;

lazy_static! {
    static ref SCRYPT_PARAMS: Params =
        Params::new(10, 1, 1, 32).expect("N=1024, r=1, p=1 are valid scrypt parameters");
}

/// Largest target (lowest difficulty): all ones shifted right by `shift` bits.
pub fn pow_limit(shift: usize) -> Uint256 {
    Uint256([u64::max_value(); 4]) >> shift
}

pub fn compact_target(target: &Uint256) -> u32 {
    BlockHeader::compact_target_from_u256(target)
}

pub fn target_from_compact(bits: u32) -> Uint256 {
    BlockHeader::u256_from_compact_target(bits)
}

/// scrypt hash of a serialized header.
pub fn scrypt_hash(data: &[u8]) -> Result<[u8; 32]> {
    let mut out = [0u8; 32];
    scrypt(data, data, &SCRYPT_PARAMS, &mut out)
        .map_err(|e| ErrorKind::PowHash(e.to_string()))?;
    Ok(out)
}

pub fn header_hash(header: &BlockHeader) -> Result<BlockHash> {
    let bytes = serialize(header);
    Ok(BlockHash::from_inner(scrypt_hash(&bytes)?))
}

pub fn hash_to_uint256(hash: &BlockHash) -> Uint256 {
    let bytes = hash.as_inner();
    let mut words = [0u64; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *word = u64::from_le_bytes(buf);
    }
    Uint256(words)
}

/// True when `hash`, read as a number, does not exceed `target`.
pub fn meets_target(hash: &BlockHash, target: &Uint256) -> bool {
    hash_to_uint256(hash) <= *target
}
