pub mod beverage;
pub mod drinks;
pub mod condiments;
pub mod receipt;
pub mod menu;

pub use beverage::{chain_description, chain_price, layers, Beverage};
pub use drinks::{Espresso, HouseBlend};
pub use condiments::{Condiment, Milk, Sugar};
pub use receipt::{LineKind, Receipt, ReceiptLine};
pub use menu::{compose, CondimentKind, DrinkKind, MenuError, MenuResult};
pub use brew_shared::Price;
