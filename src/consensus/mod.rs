pub mod encode;
pub mod pow;
