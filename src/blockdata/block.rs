use std::io;

use bitcoin::{
    consensus::{Decodable, Encodable},
    util::hash::bitcoin_merkle_root,
    VarInt,
};

use crate::blockdata::transaction::Transaction;
use crate::consensus::encode::{Error, MAX_VEC_SIZE};
use crate::consensus::pow;
use crate::errors::Result;

pub use bitcoin::TxMerkleNode;
pub type BlockHeader = bitcoin::BlockHeader;
pub type BlockHash = bitcoin::BlockHash;

// Proof-of-stake block: header, transactions and the block signature
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Block {
    pub header: BlockHeader,
    pub txdata: Vec<Transaction>,
    /// Signature by the staking key; empty for proof-of-work blocks.
    pub signature: Vec<u8>,
}

impl Block {
    /// Returns the block hash (the scrypt proof-of-work hash of the header).
    pub fn block_hash(&self) -> Result<BlockHash> {
        pow::header_hash(&self.header)
    }

    /// check if merkle root of header matches merkle root of the transaction list
    pub fn check_merkle_root(&self) -> bool {
        match self.compute_merkle_root() {
            Some(merkle_root) => self.header.merkle_root == merkle_root,
            None => false,
        }
    }

    /// Computes the transaction merkle root.
    ///
    /// A single transaction is its own root.
    pub fn compute_merkle_root(&self) -> Option<TxMerkleNode> {
        let hashes = self.txdata.iter().map(|obj| obj.txid().as_hash());
        bitcoin_merkle_root(hashes).map(|h| h.into())
    }

    /// Returns the size of the block.
    ///
    /// size == header + transaction count + transactions + signature
    pub fn size(&self) -> usize {
        let txs_size: usize = self.txdata.iter().map(Transaction::size).sum();
        80 + VarInt(self.txdata.len() as u64).len()
            + txs_size
            + VarInt(self.signature.len() as u64).len()
            + self.signature.len()
    }

    /// Returns the coinbase transaction, if one is present.
    pub fn coinbase(&self) -> Option<&Transaction> {
        self.txdata.first()
    }

    pub fn is_proof_of_stake(&self) -> bool {
        self.txdata.len() > 1 && self.txdata[1].is_coin_stake()
    }
}

impl Decodable for Block {
    fn consensus_decode<D: io::Read>(d: D) -> std::result::Result<Self, Error> {
        let mut d = d.take(MAX_VEC_SIZE as u64);
        let header = BlockHeader::consensus_decode(&mut d)?;
        let txdata_len = VarInt::consensus_decode(&mut d)?.0 as usize;
        let mut txdata = Vec::with_capacity(txdata_len.min(1024));
        for _ in 0..txdata_len {
            txdata.push(Transaction::consensus_decode(&mut d)?);
        }
        let signature = Decodable::consensus_decode(&mut d)?;
        Ok(Block {
            header,
            txdata,
            signature,
        })
    }
}

impl Encodable for Block {
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> std::result::Result<usize, io::Error> {
        let mut len = 0;
        len += self.header.consensus_encode(&mut s)?;
        len += VarInt(self.txdata.len() as u64).consensus_encode(&mut s)?;
        for tx in &self.txdata {
            len += tx.consensus_encode(&mut s)?;
        }
        len += self.signature.consensus_encode(&mut s)?;
        Ok(len)
    }
}
