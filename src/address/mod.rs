// Base58Check version prefixes per network

use bitcoin::util::base58;

/// Address and key kinds that carry a Base58Check version prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

/// Version bytes for every [`Base58Type`].
///
/// Every kind has a field, so a complete table is enforced by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressPrefixes {
    pub pubkey_address: [u8; 1],
    pub script_address: [u8; 1],
    pub secret_key: [u8; 1],
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
}

impl AddressPrefixes {
    pub fn prefix(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }

    /// Base58Check-encode `payload` behind the version bytes of `kind`.
    pub fn encode(&self, kind: Base58Type, payload: &[u8]) -> String {
        let prefix = self.prefix(kind);
        let mut data = Vec::with_capacity(prefix.len() + payload.len());
        data.extend_from_slice(prefix);
        data.extend_from_slice(payload);
        base58::check_encode_slice(&data)
    }
}

pub const MAINNET_PREFIXES: AddressPrefixes = AddressPrefixes {
    pubkey_address: [23],
    script_address: [85],
    secret_key: [153],
    ext_public_key: [0x04, 0x88, 0xB2, 0x1E],
    ext_secret_key: [0x04, 0x88, 0xAD, 0xE4],
};

pub const TESTNET_PREFIXES: AddressPrefixes = AddressPrefixes {
    pubkey_address: [111],
    script_address: [196],
    secret_key: [239],
    ext_public_key: [0x04, 0x35, 0x87, 0xCF],
    ext_secret_key: [0x04, 0x35, 0x83, 0x94],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_lengths() {
        for kind in Base58Type::ALL.iter() {
            let expected = match kind {
                Base58Type::ExtPublicKey | Base58Type::ExtSecretKey => 4,
                _ => 1,
            };
            assert_eq!(MAINNET_PREFIXES.prefix(*kind).len(), expected);
            assert_eq!(TESTNET_PREFIXES.prefix(*kind).len(), expected);
        }
    }

    #[test]
    fn test_mainnet_address_encoding() {
        assert_eq!(
            MAINNET_PREFIXES.encode(Base58Type::PubkeyAddress, &[0u8; 20]),
            "AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM"
        );
        assert_eq!(
            MAINNET_PREFIXES.encode(Base58Type::ScriptAddress, &[0u8; 20]),
            "bCjGhELVMLPUWqrN5fK6Df8sVsuBWTKAVN"
        );
    }

    #[test]
    fn test_testnet_address_encoding() {
        assert_eq!(
            TESTNET_PREFIXES.encode(Base58Type::PubkeyAddress, &[0u8; 20]),
            "mfWxJ45yp2SFn7UciZyNpvDKrzbhyfKrY8"
        );
        let mut wif = [0u8; 33];
        wif[32] = 1;
        assert_eq!(
            TESTNET_PREFIXES.encode(Base58Type::SecretKey, &wif),
            "cMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN87J7g8rY9t"
        );
    }
}
