//! Consensus parameters of the main, test and regression-test networks.
//!
//! A [`Definition`] is the unvalidated literal template of one network.
//! [`Definition::build`] turns it into an immutable [`ChainParams`], building
//! the genesis block and refusing any set whose genesis does not match its
//! hardcoded hash and merkle root.

pub mod genesis;
mod networks;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use bitcoin::util::uint::Uint256;

use crate::address::{AddressPrefixes, Base58Type};
use crate::blockdata::block::{Block, BlockHash, TxMerkleNode};
use crate::chain::Network;
use crate::consensus::pow;
use crate::errors::*;
use crate::network::{DnsSeed, FixedSeeds, Magic, SeedAddress};

use self::genesis::GenesisSpec;

/// Literal parameters of one network, before any integrity check.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub network: Network,
    pub magic: Magic,
    /// Hex-encoded key that signs network alerts.
    pub alert_pubkey: &'static str,
    pub default_port: u16,
    pub rpc_port: u16,
    /// Maximum target, i.e. minimum difficulty.
    pub pow_limit: Uint256,
    pub genesis: GenesisSpec,
    pub genesis_hash: &'static str,
    pub genesis_merkle_root: &'static str,
    pub data_dir_suffix: &'static str,
    pub dns_seeds: &'static [DnsSeed],
    pub fixed_seeds: FixedSeeds,
    pub prefixes: AddressPrefixes,
    /// Height of the last proof-of-work block before proof-of-stake takes over.
    pub last_pow_block: u32,
    pub require_rpc_password: bool,
}

impl Definition {
    pub fn main() -> Definition {
        networks::main()
    }

    pub fn testnet() -> Definition {
        networks::testnet(&networks::main())
    }

    pub fn regtest() -> Definition {
        networks::regtest(&Definition::testnet())
    }

    pub fn for_network(network: Network) -> Definition {
        match network {
            Network::Main => Definition::main(),
            Network::Testnet => Definition::testnet(),
            Network::Regtest => Definition::regtest(),
        }
    }

    /// Build the genesis block and check it against the hardcoded literals.
    pub fn build(&self) -> Result<ChainParams> {
        let genesis = self.genesis.build()?;

        let expected_hash = BlockHash::from_str(self.genesis_hash)?;
        if genesis.hash != expected_hash {
            bail!(self.mismatch("hash", expected_hash, genesis.hash));
        }
        let expected_root = TxMerkleNode::from_str(self.genesis_merkle_root)?;
        if genesis.merkle_root != expected_root {
            bail!(self.mismatch("merkle root", expected_root, genesis.merkle_root));
        }
        let target = pow::target_from_compact(self.genesis.bits);
        if !pow::meets_target(&genesis.hash, &target) {
            bail!(self.mismatch(
                "proof of work",
                format!("hash <= {:#010x} target", self.genesis.bits),
                genesis.hash,
            ));
        }

        let alert_pubkey = hex::decode(self.alert_pubkey)?;
        debug!("{} genesis {} verified", self.network, genesis.hash);

        Ok(ChainParams {
            network: self.network,
            magic: self.magic,
            alert_pubkey,
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            pow_limit: self.pow_limit,
            genesis: genesis.block,
            genesis_hash: genesis.hash,
            genesis_merkle_root: genesis.merkle_root,
            data_dir_suffix: self.data_dir_suffix,
            dns_seeds: self.dns_seeds,
            fixed_seeds: self.fixed_seeds,
            prefixes: self.prefixes.clone(),
            last_pow_block: self.last_pow_block,
            require_rpc_password: self.require_rpc_password,
        })
    }

    fn mismatch(
        &self,
        field: &'static str,
        expected: impl ToString,
        computed: impl ToString,
    ) -> ErrorKind {
        ErrorKind::GenesisMismatch(
            self.network.to_string(),
            field,
            expected.to_string(),
            computed.to_string(),
        )
    }
}

/// Verified, immutable consensus parameters of one network.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainParams {
    network: Network,
    magic: Magic,
    alert_pubkey: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    pow_limit: Uint256,
    genesis: Block,
    genesis_hash: BlockHash,
    genesis_merkle_root: TxMerkleNode,
    data_dir_suffix: &'static str,
    dns_seeds: &'static [DnsSeed],
    fixed_seeds: FixedSeeds,
    prefixes: AddressPrefixes,
    last_pow_block: u32,
    require_rpc_password: bool,
}

impl ChainParams {
    pub fn network(&self) -> Network {
        self.network
    }

    pub fn magic(&self) -> Magic {
        self.magic
    }

    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    pub fn pow_limit(&self) -> &Uint256 {
        &self.pow_limit
    }

    pub fn genesis(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> BlockHash {
        self.genesis_hash
    }

    pub fn genesis_merkle_root(&self) -> TxMerkleNode {
        self.genesis_merkle_root
    }

    pub fn data_dir_suffix(&self) -> &'static str {
        self.data_dir_suffix
    }

    /// Where this network keeps its data under `base`.
    pub fn data_dir(&self, base: &Path) -> PathBuf {
        if self.data_dir_suffix.is_empty() {
            base.to_path_buf()
        } else {
            base.join(self.data_dir_suffix)
        }
    }

    pub fn dns_seeds(&self) -> &'static [DnsSeed] {
        self.dns_seeds
    }

    /// Decode the compiled seed table. Every call stamps fresh last-seen times.
    pub fn fixed_seeds(&self) -> Vec<SeedAddress> {
        self.fixed_seeds.decode()
    }

    pub fn fixed_seed_table(&self) -> &FixedSeeds {
        &self.fixed_seeds
    }

    pub fn prefixes(&self) -> &AddressPrefixes {
        &self.prefixes
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.prefixes.prefix(kind)
    }

    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    pub fn require_rpc_password(&self) -> bool {
        self.require_rpc_password
    }

    pub fn summary(&self) -> ParamsSummary {
        ParamsSummary {
            network: self.network,
            magic: self.magic.to_string(),
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            genesis_hash: self.genesis_hash.to_string(),
            genesis_merkle_root: self.genesis_merkle_root.to_string(),
            genesis_time: self.genesis.header.time,
            genesis_bits: format!("{:08x}", self.genesis.header.bits),
            data_dir_suffix: self.data_dir_suffix,
            dns_seeds: self.dns_seeds.iter().map(|s| s.host).collect(),
            fixed_seeds: self.fixed_seeds.len(),
            pubkey_address_prefix: hex::encode(self.base58_prefix(Base58Type::PubkeyAddress)),
            script_address_prefix: hex::encode(self.base58_prefix(Base58Type::ScriptAddress)),
            last_pow_block: self.last_pow_block,
            require_rpc_password: self.require_rpc_password,
        }
    }
}

/// Serializable overview of a parameter set.
#[derive(Debug, Serialize)]
pub struct ParamsSummary {
    pub network: Network,
    pub magic: String,
    pub default_port: u16,
    pub rpc_port: u16,
    pub genesis_hash: String,
    pub genesis_merkle_root: String,
    pub genesis_time: u32,
    pub genesis_bits: String,
    pub data_dir_suffix: &'static str,
    pub dns_seeds: Vec<&'static str>,
    pub fixed_seeds: usize,
    pub pubkey_address_prefix: String,
    pub script_address_prefix: String,
    pub last_pow_block: u32,
    pub require_rpc_password: bool,
}
