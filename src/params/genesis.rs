//! Genesis block construction.
//!
//! A genesis block is fully determined by a handful of literals. Building it
//! is pure; [`mine`] is the maintenance path that searches for a nonce when
//! those literals change, and is never used when loading parameters.

use bitcoin::util::uint::Uint256;

use crate::blockdata::block::{Block, BlockHash, BlockHeader, TxMerkleNode};
use crate::blockdata::script::genesis_coinbase_script;
use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut, SEQUENCE_FINAL};
use crate::consensus::pow;
use crate::errors::*;

/// Literal inputs of a network's genesis block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisSpec {
    /// Human-readable bytes embedded in the coinbase input script.
    pub tag: &'static [u8],
    /// Timestamp of the coinbase transaction itself.
    pub tx_time: u32,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// A built genesis block with its computed hash and merkle root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genesis {
    pub block: Block,
    pub hash: BlockHash,
    pub merkle_root: TxMerkleNode,
}

impl GenesisSpec {
    /// The coinbase: one input spending nothing, one empty unspendable output.
    pub fn coinbase(&self) -> Transaction {
        Transaction {
            version: 1,
            time: self.tx_time,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: genesis_coinbase_script(self.tag),
                sequence: SEQUENCE_FINAL,
            }],
            output: vec![TxOut::empty()],
            lock_time: 0,
        }
    }

    fn header(&self, merkle_root: TxMerkleNode) -> BlockHeader {
        BlockHeader {
            version: self.version,
            prev_blockhash: BlockHash::default(),
            merkle_root,
            time: self.time,
            bits: self.bits,
            nonce: self.nonce,
        }
    }

    pub fn build(&self) -> Result<Genesis> {
        let coinbase = self.coinbase();
        // a one-leaf tree's root is the leaf itself
        let merkle_root = TxMerkleNode::from(coinbase.txid().as_hash());
        let block = Block {
            header: self.header(merkle_root),
            txdata: vec![coinbase],
            signature: vec![],
        };
        let hash = block.block_hash()?;
        Ok(Genesis {
            block,
            hash,
            merkle_root,
        })
    }
}

/// Search for a nonce whose block hash does not exceed `target`.
///
/// Starts at `start_nonce` and counts upward. When the nonce wraps past
/// `u32::MAX` the block time is bumped by one second; running out of block
/// times is an error. Returns the spec with the winning time and nonce.
pub fn mine(spec: &GenesisSpec, target: &Uint256, start_nonce: u32) -> Result<GenesisSpec> {
    let merkle_root = TxMerkleNode::from(spec.coinbase().txid().as_hash());
    let mut candidate = GenesisSpec {
        nonce: start_nonce,
        ..*spec
    };
    let mut attempts: u64 = 0;
    loop {
        let hash = pow::header_hash(&candidate.header(merkle_root))?;
        attempts += 1;
        if pow::meets_target(&hash, target) {
            info!(
                "found genesis {} at time={} nonce={} after {} attempts",
                hash, candidate.time, candidate.nonce, attempts
            );
            return Ok(candidate);
        }
        if attempts % 100_000 == 0 {
            debug!("{} attempts, nonce={}", attempts, candidate.nonce);
        }
        candidate.nonce = candidate.nonce.wrapping_add(1);
        if candidate.nonce == 0 {
            candidate.time = match candidate.time.checked_add(1) {
                Some(time) => time,
                None => bail!(ErrorKind::SearchExhausted(candidate.time)),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn main_spec() -> GenesisSpec {
        GenesisSpec {
            tag: b"Alexium",
            tx_time: 1438812711,
            version: 1,
            time: 1438812711,
            bits: 0x1f00ffff,
            nonce: 23293,
        }
    }

    #[test]
    fn test_build_main_genesis() {
        let genesis = main_spec().build().unwrap();
        assert_eq!(
            genesis.hash,
            BlockHash::from_str("00005dbb0c5f9f2e0d34c59365f555cc7cc61842f2ee5d9d9bed4ad0ed6f30ca")
                .unwrap()
        );
        assert_eq!(
            genesis.merkle_root.to_string(),
            "96b50ffb60828fc4208491f2e42794468e7343261c5502c6a96cac0add249e27"
        );
        assert!(genesis.block.check_merkle_root());
        assert_eq!(genesis.block.header.prev_blockhash, BlockHash::default());
        assert_eq!(genesis.block.header.version, 1);
        assert_eq!(genesis.block.txdata.len(), 1);
        assert!(genesis.block.coinbase().unwrap().is_coin_base());
        assert!(!genesis.block.is_proof_of_stake());
        // header + count + 75-byte coinbase + empty signature
        assert_eq!(genesis.block.size(), 80 + 1 + 75 + 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = main_spec().build().unwrap();
        let b = main_spec().build().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_block_time_does_not_touch_merkle_root() {
        let spec = GenesisSpec {
            time: 1411111111,
            bits: 0x207fffff,
            nonce: 1,
            ..main_spec()
        };
        let genesis = spec.build().unwrap();
        assert_eq!(genesis.merkle_root, main_spec().build().unwrap().merkle_root);
        assert_eq!(
            genesis.hash.to_string(),
            "5e743d2525c70e339b827b89533cd4143a2e67095980a31b0937d82007b8e420"
        );
    }

    #[test]
    fn test_mine_first_nonce() {
        let spec = GenesisSpec {
            time: 1411111111,
            bits: 0x207fffff,
            nonce: 0,
            ..main_spec()
        };
        let mined = mine(&spec, &pow::pow_limit(1), 1).unwrap();
        assert_eq!(mined.nonce, 1);
        assert_eq!(mined.time, 1411111111);
    }

    #[test]
    fn test_mine_searches_upward() {
        let spec = GenesisSpec {
            bits: 0x200fffff,
            ..main_spec()
        };
        let mined = mine(&spec, &pow::pow_limit(4), 1).unwrap();
        assert_eq!(mined.nonce, 12);
        assert_eq!(
            mined.build().unwrap().hash.to_string(),
            "0542952a38f2c4d7d1b40863b52492ade54dd23f9297131a47887dd210033ce0"
        );
    }

    #[test]
    fn test_mine_bumps_time_on_wrap() {
        let spec = GenesisSpec {
            bits: 0x200fffff,
            ..main_spec()
        };
        let mined = mine(&spec, &pow::pow_limit(4), u32::max_value()).unwrap();
        assert_eq!(mined.time, 1438812712);
        assert_eq!(mined.nonce, 37);
        assert_eq!(mined.tx_time, 1438812711);
    }

    #[test]
    fn test_mine_stops_at_last_block_time() {
        let spec = GenesisSpec {
            time: u32::max_value(),
            ..main_spec()
        };
        let err = mine(&spec, &Uint256([0; 4]), u32::max_value()).unwrap_err();
        match err.kind() {
            ErrorKind::SearchExhausted(time) => assert_eq!(*time, u32::max_value()),
            other => panic!("unexpected error: {}", other),
        }
    }
}
