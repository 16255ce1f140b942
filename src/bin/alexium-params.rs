extern crate chainparams;
#[macro_use]
extern crate log;

use std::process;

use error_chain::ChainedError;

use chainparams::{
    config::Config,
    errors::*,
    registry::{self, NetworkRegistry},
};

fn run(config: Config) -> Result<()> {
    let mut networks = NetworkRegistry::new()?;
    networks.select_from_flags(config.testnet, config.regtest)?;
    let params = registry::install(&networks)?;

    let datadir = params.data_dir(&config.datadir);
    info!("data directory: {}", datadir.display());

    let summary = serde_json::to_string_pretty(&params.summary())
        .chain_err(|| "failed to serialize parameters")?;
    println!("{}", summary);
    Ok(())
}

fn main() {
    let config = Config::from_args();
    config.init_logging();
    if let Err(e) = run(config) {
        error!("startup failed: {}", e.display_chain());
        process::exit(1);
    }
}
