// Script helpers for coinbase construction

// Re-export everything from bitcoin script module so it can be used as script::Type
pub use bitcoin::blockdata::script::*;

/// Number pushed after `OP_0` in every genesis coinbase script.
pub const GENESIS_SCRIPT_NUMBER: i64 = 42;

/// Builds the input script of a genesis coinbase: `OP_0 <42> <tag>`.
///
/// The tag is an arbitrary human-readable byte string; nothing is spent.
pub fn genesis_coinbase_script(tag: &[u8]) -> Script {
    Builder::new()
        .push_int(0)
        .push_int(GENESIS_SCRIPT_NUMBER)
        .push_slice(tag)
        .into_script()
}
