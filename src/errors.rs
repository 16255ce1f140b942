error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    foreign_links {
        Hex(::hex::FromHexError);
        HashHex(::bitcoin::hashes::hex::Error);
        Clap(::clap::Error);
    }

    errors {
        GenesisMismatch(network: String, field: &'static str, expected: String, computed: String) {
            description("genesis integrity check failed")
            display("{} genesis {} mismatch: expected {}, computed {}", network, field, expected, computed)
        }

        MagicCollision(a: String, b: String) {
            description("message start bytes collide")
            display("networks {} and {} share the same message start bytes", a, b)
        }

        ConflictingNetworks {
            description("conflicting network selection")
            display("invalid combination of -regtest and -testnet")
        }

        UnknownNetwork(name: String) {
            description("unknown network")
            display("unknown network: {:?}", name)
        }

        AlreadyInstalled {
            description("network parameters already installed")
            display("network parameters may only be installed once per process")
        }

        NotInstalled {
            description("network parameters not installed")
            display("network parameters read before startup selection")
        }

        SearchExhausted(time: u32) {
            description("genesis search exhausted")
            display("no genesis nonce found up to block time {}", time)
        }

        PowHash(msg: String) {
            description("proof-of-work hash failure")
            display("proof-of-work hash failure: {}", msg)
        }
    }
}
