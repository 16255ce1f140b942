use std::fmt;

pub use bitcoin::network::constants::ServiceFlags;

/// Message start bytes prefixed to every P2P message of a network.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
pub struct Magic(pub [u8; 4]);

impl Magic {
    /// The magic as the little-endian integer found at the head of a message.
    pub fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_repr() {
        let magic = Magic([0x7f, 0x35, 0x22, 0x05]);
        assert_eq!(magic.to_string(), "7f352205");
        assert_eq!(magic.to_u32(), 0x0522_357f);
    }
}
