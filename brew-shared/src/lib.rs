pub mod money;

pub use money::{Price, PriceError, PriceResult};
