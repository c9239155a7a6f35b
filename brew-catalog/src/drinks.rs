use brew_shared::Price;
use crate::beverage::Beverage;

/// A shot of espresso
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Espresso;

impl Espresso {
    pub const NAME: &'static str = "Espresso";
    pub const COST: Price = Price::from_cents(199);
}

impl Beverage for Espresso {
    fn label(&self) -> &'static str {
        Self::NAME
    }

    fn describe(&self) -> String {
        Self::NAME.to_string()
    }

    fn price(&self) -> Price {
        Self::COST
    }

    fn own_price(&self) -> Price {
        Self::COST
    }
}

/// Drip-brewed house coffee
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HouseBlend;

impl HouseBlend {
    pub const NAME: &'static str = "House Blend Coffee";
    pub const COST: Price = Price::from_cents(150);
}

impl Beverage for HouseBlend {
    fn label(&self) -> &'static str {
        Self::NAME
    }

    fn describe(&self) -> String {
        Self::NAME.to_string()
    }

    fn price(&self) -> Price {
        Self::COST
    }

    fn own_price(&self) -> Price {
        Self::COST
    }
}
