// Proof-of-stake block and transaction structures
pub mod block;
pub mod script;
pub mod transaction;
pub mod units;
