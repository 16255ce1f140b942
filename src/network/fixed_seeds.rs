// Compiled peer tables. Each record is a 16-byte IPv6 address (IPv4 as
// ::ffff:a.b.c.d) followed by the port in network byte order.
//
// Both tables ship empty until a verified list of long-running nodes is
// generated; peers are found through the DNS seeds meanwhile.

use crate::network::seeds::SEED_RECORD_LEN;

pub const MAINNET: &[u8] = &[];

pub const TESTNET: &[u8] = &[];

const _: () = assert!(MAINNET.len() % SEED_RECORD_LEN == 0);
const _: () = assert!(TESTNET.len() % SEED_RECORD_LEN == 0);
