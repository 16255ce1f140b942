// Literal definitions of the three networks.
//
// Testnet starts from a copy of main and regtest from a copy of testnet.
// Each override below is the complete list of fields that differ from the
// parent; everything else is inherited as-is.

use crate::address::{MAINNET_PREFIXES, TESTNET_PREFIXES};
use crate::chain::Network;
use crate::consensus::pow::{compact_target, pow_limit};
use crate::network::fixed_seeds;
use crate::network::{DnsSeed, FixedSeeds, Magic};
use crate::params::genesis::GenesisSpec;
use crate::params::Definition;

const GENESIS_TAG: &[u8] = b"Alexium";
const GENESIS_TIME: u32 = 1438812711;

const MAINNET_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::new("209.126.77.237", "209.126.77.237"),
    DnsSeed::new("209.126.76.194", "209.126.76.194"),
    DnsSeed::new("209.126.76.193", "209.126.76.193"),
    DnsSeed::new("209.126.75.94", "209.126.75.94"),
    DnsSeed::new("209.126.74.245", "209.126.74.245"),
    DnsSeed::new("209.126.69.78", "209.126.69.78"),
];

pub(super) fn main() -> Definition {
    let pow_limit = pow_limit(16);
    Definition {
        network: Network::Main,
        // Rarely used upper ASCII, not valid UTF-8, and a large 4-byte int at any alignment.
        magic: Magic([0x7f, 0x35, 0x22, 0x05]),
        alert_pubkey: "04e4859569daee357967024a5d0374c10c9921ff3eaa26900118c22778a63694e6db5087be0349c1f84bc4dfcdf624f3fd2b04379c331c1a9541b0bc0e02eaf417",
        default_port: 45714,
        rpc_port: 45715,
        genesis: GenesisSpec {
            tag: GENESIS_TAG,
            tx_time: GENESIS_TIME,
            version: 1,
            time: GENESIS_TIME,
            bits: compact_target(&pow_limit),
            nonce: 23293,
        },
        pow_limit,
        genesis_hash: "00005dbb0c5f9f2e0d34c59365f555cc7cc61842f2ee5d9d9bed4ad0ed6f30ca",
        genesis_merkle_root: "96b50ffb60828fc4208491f2e42794468e7343261c5502c6a96cac0add249e27",
        data_dir_suffix: "",
        dns_seeds: MAINNET_DNS_SEEDS,
        fixed_seeds: FixedSeeds::new(fixed_seeds::MAINNET),
        prefixes: MAINNET_PREFIXES,
        last_pow_block: 2391,
        require_rpc_password: true,
    }
}

pub(super) fn testnet(main: &Definition) -> Definition {
    let mut def = main.clone();
    def.network = Network::Testnet;
    def.magic = Magic([0xfd, 0xf2, 0xc0, 0xef]);
    def.pow_limit = pow_limit(16);
    def.alert_pubkey = "045aeb971044b4a8915e0839317083e666701978b679034f453539a6be492d7949fe056aa5dd663180bec6eae1c569e6c14ee519bb6224ebd673b819742113a387";
    def.default_port = 55714;
    def.rpc_port = 55715;
    def.data_dir_suffix = "testnet";

    def.genesis.bits = compact_target(&def.pow_limit);
    def.genesis.nonce = 23293;
    def.genesis_hash = "00005dbb0c5f9f2e0d34c59365f555cc7cc61842f2ee5d9d9bed4ad0ed6f30ca";

    // main's peers are never valid testnet peers
    def.dns_seeds = &[];
    def.fixed_seeds = FixedSeeds::new(fixed_seeds::TESTNET);

    def.prefixes = TESTNET_PREFIXES;
    def.last_pow_block = 0x7fff_ffff;
    def
}

pub(super) fn regtest(testnet: &Definition) -> Definition {
    let mut def = testnet.clone();
    def.network = Network::Regtest;
    def.magic = Magic([0xff, 0xbf, 0xb5, 0xda]);
    def.pow_limit = pow_limit(1);
    def.default_port = 18444;
    def.data_dir_suffix = "regtest";

    def.genesis.time = 1411111111;
    def.genesis.bits = compact_target(&def.pow_limit);
    def.genesis.nonce = 1;
    def.genesis_hash = "5e743d2525c70e339b827b89533cd4143a2e67095980a31b0937d82007b8e420";

    def.dns_seeds = &[];
    def.fixed_seeds = FixedSeeds::empty();
    def.require_rpc_password = false;
    // last_pow_block stays at testnet's value: no proof-of-work cutoff on regtest.
    def
}
