pub mod constants;
pub mod fixed_seeds;
pub mod seeds;

pub use self::constants::Magic;
pub use self::seeds::{DnsSeed, FixedSeeds, SeedAddress, SeedSpec};
