// Re-export specific utilities we need
pub use bitcoin::consensus::encode::{deserialize, serialize, Decodable, Encodable, Error};

/// Maximum size, in bytes, of a vector we are allowed to decode.
pub const MAX_VEC_SIZE: usize = 4_000_000;
