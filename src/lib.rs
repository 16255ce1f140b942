#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

pub mod address;
pub mod blockdata;
pub mod chain;
pub mod config;
pub mod consensus;
pub mod errors;
pub mod network;
pub mod params;
pub mod registry;

pub use crate::chain::Network;
pub use crate::params::{ChainParams, Definition};
pub use crate::registry::NetworkRegistry;
