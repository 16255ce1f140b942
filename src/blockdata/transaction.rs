use std::io;

use crate::blockdata::{script::Script, units::Amount};
use crate::consensus::encode::{serialize, Decodable, Encodable, Error, MAX_VEC_SIZE};

use bitcoin::{hashes::Hash, VarInt};
pub use bitcoin::{OutPoint, Txid};

/// Sequence number of a final input.
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

// Proof-of-stake transaction: a bitcoin transaction with a timestamp after the version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub time: u32,
    pub input: Vec<TxIn>,
    pub output: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Double SHA-256 of the full serialization.
    pub fn txid(&self) -> Txid {
        let mut enc = Txid::engine();
        self.consensus_encode(&mut enc)
            .expect("engines don't error");
        Txid::from_engine(enc)
    }

    pub fn is_coin_base(&self) -> bool {
        self.input.len() == 1 && self.input[0].previous_output.is_null()
    }

    /// A coinstake spends a real input and leaves its first output empty.
    pub fn is_coin_stake(&self) -> bool {
        !self.input.is_empty()
            && !self.input[0].previous_output.is_null()
            && self.output.len() >= 2
            && self.output[0].is_empty()
    }

    pub fn size(&self) -> usize {
        serialize(self).len()
    }
}

impl Encodable for Transaction {
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, io::Error> {
        let mut len = 0;
        len += self.version.consensus_encode(&mut s)?;
        len += self.time.consensus_encode(&mut s)?;
        len += VarInt(self.input.len() as u64).consensus_encode(&mut s)?;
        for input in &self.input {
            len += input.consensus_encode(&mut s)?;
        }
        len += VarInt(self.output.len() as u64).consensus_encode(&mut s)?;
        for output in &self.output {
            len += output.consensus_encode(&mut s)?;
        }
        len += self.lock_time.consensus_encode(s)?;
        Ok(len)
    }
}

impl Decodable for Transaction {
    fn consensus_decode<D: io::Read>(d: D) -> Result<Self, Error> {
        let mut d = d.take(MAX_VEC_SIZE as u64);
        let version = i32::consensus_decode(&mut d)?;
        let time = u32::consensus_decode(&mut d)?;

        let input_len = VarInt::consensus_decode(&mut d)?.0 as usize;
        let mut input = Vec::with_capacity(input_len.min(1024));
        for _ in 0..input_len {
            input.push(TxIn::consensus_decode(&mut d)?);
        }

        let output_len = VarInt::consensus_decode(&mut d)?.0 as usize;
        let mut output = Vec::with_capacity(output_len.min(1024));
        for _ in 0..output_len {
            output.push(TxOut::consensus_decode(&mut d)?);
        }

        Ok(Transaction {
            version,
            time,
            input,
            output,
            lock_time: Decodable::consensus_decode(d)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    pub value: Amount,
    pub script_pubkey: Script,
}

impl TxOut {
    /// A zero-value output with an empty script. Nothing can ever spend it.
    pub fn empty() -> Self {
        TxOut {
            value: Amount::ZERO,
            script_pubkey: Script::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == Amount::ZERO && self.script_pubkey.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    pub previous_output: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

impl Encodable for TxIn {
    fn consensus_encode<W: io::Write>(&self, mut writer: W) -> Result<usize, io::Error> {
        let mut len = 0;
        len += self.previous_output.consensus_encode(&mut writer)?;
        len += self.script_sig.consensus_encode(&mut writer)?;
        len += self.sequence.consensus_encode(&mut writer)?;
        Ok(len)
    }
}

impl Decodable for TxIn {
    fn consensus_decode<R: io::Read>(mut reader: R) -> Result<Self, Error> {
        Ok(TxIn {
            previous_output: Decodable::consensus_decode(&mut reader)?,
            script_sig: Decodable::consensus_decode(&mut reader)?,
            sequence: Decodable::consensus_decode(&mut reader)?,
        })
    }
}

impl Encodable for TxOut {
    fn consensus_encode<W: io::Write>(&self, mut writer: W) -> Result<usize, io::Error> {
        let mut len = 0;
        len += self.value.consensus_encode(&mut writer)?;
        len += self.script_pubkey.consensus_encode(&mut writer)?;
        Ok(len)
    }
}

impl Decodable for TxOut {
    fn consensus_decode<R: io::Read>(mut reader: R) -> Result<Self, Error> {
        Ok(TxOut {
            value: Decodable::consensus_decode(&mut reader)?,
            script_pubkey: Decodable::consensus_decode(&mut reader)?,
        })
    }
}
