use std::fmt;
use std::str::FromStr;

pub use crate::blockdata::{
    block::{Block, BlockHash, BlockHeader},
    script::{self, Script},
    transaction::{OutPoint, Transaction, TxIn, TxOut, Txid},
};
pub use bitcoin::{hashes, TxMerkleNode};

use crate::errors::*;

#[derive(Debug, Copy, Clone, PartialEq, Hash, Serialize, Ord, PartialOrd, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Main,
    Testnet,
    Regtest,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Main, Network::Testnet, Network::Regtest];

    pub fn name(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }

    pub fn is_regtest(self) -> bool {
        match self {
            Network::Regtest => true,
            _ => false,
        }
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|n| n.name().to_string()).collect()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(network_name: &str) -> Result<Self> {
        match network_name {
            "main" | "mainnet" => Ok(Network::Main),
            "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            _ => bail!(ErrorKind::UnknownNetwork(network_name.to_string())),
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Main
    }
}
