use std::ffi::OsString;
use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};

use crate::errors::*;

#[derive(Debug, Clone)]
pub struct Config {
    pub testnet: bool,
    pub regtest: bool,
    pub datadir: PathBuf,
    pub verbosity: usize,
    pub timestamp: bool,
}

fn default_datadir() -> PathBuf {
    let mut datadir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    datadir.push(".alexium");
    datadir
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("Alexium network parameters")
        .version(clap::crate_version!())
        .arg(
            Arg::with_name("verbosity")
                .short("v")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
        .arg(
            Arg::with_name("timestamp")
                .long("timestamp")
                .help("Prepend log lines with a timestamp"),
        )
        .arg(
            Arg::with_name("testnet")
                .long("testnet")
                .help("Use the test network"),
        )
        .arg(
            Arg::with_name("regtest")
                .long("regtest")
                .help("Use the regression test network"),
        )
        .arg(
            Arg::with_name("datadir")
                .long("datadir")
                .help("Base data directory (network subdirectories are created below it)")
                .takes_value(true),
        )
}

impl Config {
    pub fn from_args() -> Config {
        Config::from_matches(&app().get_matches())
    }

    pub fn from_iter<I, T>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Config::from_matches(&app().get_matches_from_safe(args)?))
    }

    fn from_matches(m: &ArgMatches) -> Config {
        Config {
            testnet: m.is_present("testnet"),
            regtest: m.is_present("regtest"),
            datadir: m
                .value_of("datadir")
                .map(PathBuf::from)
                .unwrap_or_else(default_datadir),
            verbosity: m.occurrences_of("verbosity") as usize,
            timestamp: m.is_present("timestamp"),
        }
    }

    pub fn init_logging(&self) {
        let mut log = stderrlog::new();
        log.verbosity(self.verbosity);
        log.timestamp(if self.timestamp {
            stderrlog::Timestamp::Millisecond
        } else {
            stderrlog::Timestamp::Off
        });
        log.init()
            .unwrap_or_else(|err| eprintln!("failed to initialize logging: {}", err));
    }
}
