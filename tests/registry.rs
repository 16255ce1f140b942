use chainparams::address::Base58Type;
use chainparams::errors::ErrorKind;
use chainparams::network::seeds::{unix_now, FixedSeeds, ONE_WEEK};
use chainparams::{Network, NetworkRegistry};

#[test]
fn test_selection_roundtrip_restores_main() {
    let mut registry = NetworkRegistry::new().unwrap();
    let original = registry.current().clone();

    registry.select(Network::Main);
    registry.select(Network::Testnet);
    assert_eq!(registry.current().network(), Network::Testnet);
    registry.select(Network::Main);

    assert_eq!(*registry.current(), original);
}

#[test]
fn test_select_from_flags() {
    let mut registry = NetworkRegistry::new().unwrap();

    assert_eq!(registry.select_from_flags(false, true).unwrap(), Network::Regtest);
    assert_eq!(registry.current().network(), Network::Regtest);

    assert_eq!(registry.select_from_flags(true, false).unwrap(), Network::Testnet);
    assert_eq!(registry.current().network(), Network::Testnet);

    assert_eq!(registry.select_from_flags(false, false).unwrap(), Network::Main);
    assert_eq!(registry.current().network(), Network::Main);
}

#[test]
fn test_conflicting_flags_leave_selection_unchanged() {
    let mut registry = NetworkRegistry::new().unwrap();
    registry.select(Network::Testnet);
    let before = registry.current().clone();

    let err = registry.select_from_flags(true, true).unwrap_err();
    match err.kind() {
        ErrorKind::ConflictingNetworks => (),
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(registry.active(), Network::Testnet);
    assert_eq!(*registry.current(), before);
}

#[test]
fn test_genesis_invariants_hold_for_every_network() {
    let registry = NetworkRegistry::new().unwrap();
    for network in Network::ALL.iter() {
        let params = registry.get(*network);
        assert_eq!(params.genesis().block_hash().unwrap(), params.genesis_hash());
        assert_eq!(
            params.genesis().compute_merkle_root().unwrap(),
            params.genesis_merkle_root()
        );
        assert!(params.genesis().check_merkle_root());
    }
}

#[test]
fn test_pubkey_prefix_distinguishes_main() {
    let registry = NetworkRegistry::new().unwrap();
    let main = registry.get(Network::Main);
    let testnet = registry.get(Network::Testnet);
    let regtest = registry.get(Network::Regtest);

    assert_eq!(main.base58_prefix(Base58Type::PubkeyAddress), &[23]);
    assert_eq!(testnet.base58_prefix(Base58Type::PubkeyAddress), &[111]);
    assert_ne!(
        main.base58_prefix(Base58Type::PubkeyAddress),
        testnet.base58_prefix(Base58Type::PubkeyAddress)
    );
    assert_ne!(
        main.base58_prefix(Base58Type::PubkeyAddress),
        regtest.base58_prefix(Base58Type::PubkeyAddress)
    );
    assert!(main
        .prefixes()
        .encode(Base58Type::PubkeyAddress, &[0x11; 20])
        .starts_with('A'));
}

#[test]
fn test_rpc_password_requirement() {
    let registry = NetworkRegistry::new().unwrap();
    assert!(registry.get(Network::Main).require_rpc_password());
    assert!(registry.get(Network::Testnet).require_rpc_password());
    assert!(!registry.get(Network::Regtest).require_rpc_password());
}

#[test]
fn test_wire_literals() {
    let registry = NetworkRegistry::new().unwrap();
    let main = registry.get(Network::Main);
    assert_eq!(main.magic().0, [0x7f, 0x35, 0x22, 0x05]);
    assert_eq!(main.default_port(), 45714);
    assert_eq!(registry.get(Network::Testnet).default_port(), 55714);

    let magics: Vec<_> = Network::ALL
        .iter()
        .map(|n| registry.get(*n).magic())
        .collect();
    assert_ne!(magics[0], magics[1]);
    assert_ne!(magics[0], magics[2]);
    assert_ne!(magics[1], magics[2]);
}

// two records: 209.126.77.237:45714 and [2001:db8::1]:45714
static SEED_TABLE: &[u8] = &[
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0xd1, 0x7e, 0x4d, 0xed, 0xb2, 0x92,
    0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01, 0xb2, 0x92,
];

#[test]
fn test_fixed_seeds_are_freshly_stamped() {
    let table = FixedSeeds::new(SEED_TABLE);
    let before = unix_now();
    let seeds = table.decode();
    let after = unix_now();

    assert_eq!(seeds.len(), 2);
    for seed in &seeds {
        assert_eq!(seed.port, 45714);
        assert!(seed.time >= before - 2 * ONE_WEEK);
        assert!(seed.time < after - ONE_WEEK);
    }

    let registry = NetworkRegistry::new().unwrap();
    for network in &Network::ALL {
        let params = registry.get(*network);
        assert_eq!(params.fixed_seeds().len(), params.fixed_seed_table().len());
    }
    assert!(registry.get(Network::Regtest).fixed_seeds().is_empty());
    assert!(registry.get(Network::Regtest).dns_seeds().is_empty());
}
