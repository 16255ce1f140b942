use std::fmt;
use std::io;

use bitcoin::consensus::{Decodable, Encodable};

/// Output value in the chain's base unit. Serialized as a signed 64-bit integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(pub i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn as_sat(&self) -> i64 {
        self.0
    }

    pub fn from_sat(satoshis: i64) -> Self {
        Amount(satoshis)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} sat", self.0)
    }
}

impl From<i64> for Amount {
    fn from(satoshis: i64) -> Self {
        Amount(satoshis)
    }
}

impl Encodable for Amount {
    fn consensus_encode<W: io::Write>(&self, writer: W) -> Result<usize, io::Error> {
        self.0.consensus_encode(writer)
    }
}

impl Decodable for Amount {
    fn consensus_decode<R: io::Read>(reader: R) -> Result<Self, bitcoin::consensus::encode::Error> {
        Ok(Amount(i64::consensus_decode(reader)?))
    }
}
