//! Selection of the active network.
//!
//! [`NetworkRegistry::new`] builds and verifies all three parameter sets
//! once. Selection only moves the active pointer between those prebuilt
//! sets; no parameter is ever mutated. Selection belongs to process startup,
//! before networking or RPC read the parameters.
//!
//! Components should receive `Arc<ChainParams>` from [`NetworkRegistry::shared`].
//! For code that cannot be handed one, [`install`] publishes the selected set
//! process-wide, exactly once, and [`params`] reads it back.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::chain::Network;
use crate::errors::*;
use crate::params::{ChainParams, Definition};

pub struct NetworkRegistry {
    main: Arc<ChainParams>,
    testnet: Arc<ChainParams>,
    regtest: Arc<ChainParams>,
    active: Network,
}

impl NetworkRegistry {
    /// Build and verify every network. Main is active afterwards.
    ///
    /// An error here means the compiled constants are inconsistent and the
    /// process must not start.
    pub fn new() -> Result<Self> {
        let main = Definition::main();
        let testnet = Definition::testnet();
        let regtest = Definition::regtest();

        let registry = NetworkRegistry {
            main: Arc::new(main.build()?),
            testnet: Arc::new(testnet.build()?),
            regtest: Arc::new(regtest.build()?),
            active: Network::Main,
        };
        registry.check_magic()?;
        info!("verified parameters for {}", Network::names().join(", "));
        Ok(registry)
    }

    fn check_magic(&self) -> Result<()> {
        for (i, a) in Network::ALL.iter().enumerate() {
            for b in &Network::ALL[i + 1..] {
                if self.get(*a).magic() == self.get(*b).magic() {
                    bail!(ErrorKind::MagicCollision(a.to_string(), b.to_string()));
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, network: Network) -> &ChainParams {
        self.get_arc(network)
    }

    fn get_arc(&self, network: Network) -> &Arc<ChainParams> {
        match network {
            Network::Main => &self.main,
            Network::Testnet => &self.testnet,
            Network::Regtest => &self.regtest,
        }
    }

    pub fn select(&mut self, network: Network) {
        if self.active != network {
            debug!("switching network {} -> {}", self.active, network);
        }
        self.active = network;
    }

    /// Regtest wins over testnet, testnet over main. Asking for both is an
    /// error and leaves the selection untouched.
    pub fn select_from_flags(&mut self, testnet: bool, regtest: bool) -> Result<Network> {
        let network = match (testnet, regtest) {
            (true, true) => bail!(ErrorKind::ConflictingNetworks),
            (_, true) => Network::Regtest,
            (true, false) => Network::Testnet,
            (false, false) => Network::Main,
        };
        self.select(network);
        Ok(network)
    }

    pub fn active(&self) -> Network {
        self.active
    }

    pub fn current(&self) -> &ChainParams {
        self.get(self.active)
    }

    /// Shared handle to the active parameters, for injection into components.
    pub fn shared(&self) -> Arc<ChainParams> {
        Arc::clone(self.get_arc(self.active))
    }
}

static INSTALLED: OnceCell<Arc<ChainParams>> = OnceCell::new();

/// Publish the registry's active parameters for the rest of the process.
///
/// Call once, after selection and before any component starts. Not reentrant;
/// a second call fails and keeps the first installation.
pub fn install(registry: &NetworkRegistry) -> Result<&'static ChainParams> {
    INSTALLED
        .set(registry.shared())
        .map_err(|_| Error::from(ErrorKind::AlreadyInstalled))?;
    info!("using {} network parameters", registry.active());
    params()
}

pub fn params() -> Result<&'static ChainParams> {
    INSTALLED
        .get()
        .map(|p| p.as_ref())
        .ok_or_else(|| ErrorKind::NotInstalled.into())
}
