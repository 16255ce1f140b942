//! Maintenance tool: search a genesis nonce for the compiled definition of a
//! network, for use after editing its genesis literals.

extern crate chainparams;
#[macro_use]
extern crate log;

use std::process;

use clap::{value_t, App, Arg};
use error_chain::ChainedError;

use chainparams::{
    chain::Network,
    errors::*,
    params::{genesis, Definition},
};

fn run(network: Network, start_nonce: u32) -> Result<()> {
    let def = Definition::for_network(network);
    info!(
        "mining {} genesis from nonce {} (time={}, bits={:08x})",
        network, start_nonce, def.genesis.time, def.genesis.bits
    );
    let mined = genesis::mine(&def.genesis, &def.pow_limit, start_nonce)?;
    let built = mined.build()?;
    println!("network: {}", network);
    println!("genesis merkle root: {}", built.merkle_root);
    println!("genesis nonce: {}", mined.nonce);
    println!("genesis time: {}", mined.time);
    println!("genesis hash: {}", built.hash);
    Ok(())
}

fn main() {
    let network_help = format!("Select network type ({})", Network::names().join(", "));
    let m = App::new("mine-genesis")
        .version(clap::crate_version!())
        .arg(
            Arg::with_name("verbosity")
                .short("v")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
        .arg(
            Arg::with_name("network")
                .long("network")
                .help(&network_help)
                .takes_value(true)
                .default_value("main"),
        )
        .arg(
            Arg::with_name("start_nonce")
                .long("start-nonce")
                .help("First nonce to try")
                .takes_value(true)
                .default_value("1"),
        )
        .get_matches();

    let mut log = stderrlog::new();
    log.verbosity(m.occurrences_of("verbosity") as usize + 2);
    log.init()
        .unwrap_or_else(|err| eprintln!("failed to initialize logging: {}", err));

    let parsed = m
        .value_of("network")
        .unwrap_or("main")
        .parse::<Network>()
        .and_then(|network| {
            let nonce = value_t!(m, "start_nonce", u32)?;
            Ok((network, nonce))
        });
    let result = parsed.and_then(|(network, nonce)| run(network, nonce));
    if let Err(e) = result {
        error!("{}", e.display_chain());
        process::exit(1);
    }
}
