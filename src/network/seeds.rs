//! Bootstrap peers: DNS seed hostnames and the compiled fixed-seed tables.
//!
//! Fixed seeds carry no real observation time. Each decode stamps every
//! record with a fresh random "last seen" between one and two weeks ago, so
//! no compiled seed keeps a favourable freshness score in the address
//! manager. Resolving the DNS seeds is left to the peer manager.

use std::convert::TryInto;
use std::net::{Ipv6Addr, SocketAddr, SocketAddrV6};
use std::time::{SystemTime, UNIX_EPOCH};

use bitcoin::network::address::Address as P2PAddress;
use rand::Rng;

use crate::network::constants::ServiceFlags;

/// Bytes per fixed-seed record: 16 address bytes and a 2-byte port.
pub const SEED_RECORD_LEN: usize = 18;

pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

impl DnsSeed {
    pub const fn new(name: &'static str, host: &'static str) -> Self {
        DnsSeed { name, host }
    }
}

/// One record of a compiled seed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedSpec {
    pub addr: Ipv6Addr,
    pub port: u16,
}

impl SeedSpec {
    pub fn from_record(record: &[u8; SEED_RECORD_LEN]) -> Self {
        let mut addr = [0u8; 16];
        addr.copy_from_slice(&record[..16]);
        SeedSpec {
            addr: Ipv6Addr::from(addr),
            port: u16::from_be_bytes([record[16], record[17]]),
        }
    }

    pub fn to_record(&self) -> [u8; SEED_RECORD_LEN] {
        let mut record = [0u8; SEED_RECORD_LEN];
        record[..16].copy_from_slice(&self.addr.octets());
        record[16..].copy_from_slice(&self.port.to_be_bytes());
        record
    }
}

impl From<SocketAddr> for SeedSpec {
    fn from(addr: SocketAddr) -> Self {
        let ip = match addr {
            SocketAddr::V4(v4) => v4.ip().to_ipv6_mapped(),
            SocketAddr::V6(v6) => *v6.ip(),
        };
        SeedSpec {
            addr: ip,
            port: addr.port(),
        }
    }
}

/// A decoded fixed seed with its synthetic last-seen time (unix seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedAddress {
    pub addr: Ipv6Addr,
    pub port: u16,
    pub time: u64,
}

impl SeedAddress {
    pub fn spec(&self) -> SeedSpec {
        SeedSpec {
            addr: self.addr,
            port: self.port,
        }
    }

    /// IPv4-mapped addresses come back as plain IPv4 socket addresses.
    pub fn socket_addr(&self) -> SocketAddr {
        match self.addr.to_ipv4_mapped() {
            Some(v4) => SocketAddr::new(v4.into(), self.port),
            None => SocketAddr::V6(SocketAddrV6::new(self.addr, self.port, 0, 0)),
        }
    }

    /// The record handed to the peer address manager.
    pub fn to_p2p_address(&self, services: ServiceFlags) -> P2PAddress {
        P2PAddress::new(&self.socket_addr(), services)
    }
}

/// A compiled seed table, decoded on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeeds {
    table: &'static [u8],
}

impl FixedSeeds {
    pub const fn new(table: &'static [u8]) -> Self {
        FixedSeeds { table }
    }

    pub const fn empty() -> Self {
        FixedSeeds { table: &[] }
    }

    pub fn len(&self) -> usize {
        self.table.len() / SEED_RECORD_LEN
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.table
    }

    pub fn specs(&self) -> impl Iterator<Item = SeedSpec> + 'static {
        seed_records(self.table).map(SeedSpec::from_record)
    }

    /// Decode with the system clock and the thread-local random source.
    pub fn decode(&self) -> Vec<SeedAddress> {
        self.decode_at(unix_now(), &mut rand::thread_rng())
    }

    pub fn decode_at<R: Rng>(&self, now: u64, rng: &mut R) -> Vec<SeedAddress> {
        decode_seed_table(self.table, now, rng)
    }
}

fn seed_records(table: &[u8]) -> impl Iterator<Item = &[u8; SEED_RECORD_LEN]> {
    table
        .chunks_exact(SEED_RECORD_LEN)
        .map(|chunk| chunk.try_into().expect("chunks_exact yields whole records"))
}

/// Decode a packed table; every record gets a time in `[now - 2 weeks, now - 1 week)`.
pub fn decode_seed_table<R: Rng>(table: &[u8], now: u64, rng: &mut R) -> Vec<SeedAddress> {
    debug_assert_eq!(table.len() % SEED_RECORD_LEN, 0, "truncated seed table");
    let seeds: Vec<SeedAddress> = seed_records(table)
        .map(|record| {
            let spec = SeedSpec::from_record(record);
            let age = ONE_WEEK + rng.gen_range(1..=ONE_WEEK);
            SeedAddress {
                addr: spec.addr,
                port: spec.port,
                time: now.saturating_sub(age),
            }
        })
        .collect();
    trace!("decoded {} fixed seeds", seeds.len());
    seeds
}

pub fn encode_seed_table(specs: &[SeedSpec]) -> Vec<u8> {
    let mut table = Vec::with_capacity(specs.len() * SEED_RECORD_LEN);
    for spec in specs {
        table.extend_from_slice(&spec.to_record());
    }
    table
}

pub fn unix_now() -> u64 {
    secs_since_epoch(SystemTime::now())
}

// A clock set before 1970 yields 0, so every seed time saturates to 0.
fn secs_since_epoch(t: SystemTime) -> u64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs(),
        Err(e) => {
            warn!("system clock is before the unix epoch: {}", e);
            0
        }
    }
}
