// The installed parameters are process-wide, so this file holds a single test.

use chainparams::errors::ErrorKind;
use chainparams::registry::{self, NetworkRegistry};
use chainparams::Network;

#[test]
fn test_install_once() {
    match registry::params() {
        Err(e) => match e.kind() {
            ErrorKind::NotInstalled => (),
            other => panic!("unexpected error: {}", other),
        },
        Ok(_) => panic!("parameters installed before startup"),
    }

    let mut startup = NetworkRegistry::new().unwrap();
    startup.select_from_flags(false, true).unwrap();
    let installed = registry::install(&startup).unwrap();
    assert_eq!(installed.network(), Network::Regtest);

    // later reselection does not leak into the installed set
    startup.select(Network::Main);
    assert!(registry::install(&startup).is_err());
    assert_eq!(registry::params().unwrap().network(), Network::Regtest);
    assert_eq!(registry::params().unwrap().default_port(), 18444);
}
