use brew_shared::Price;
use std::mem;

use crate::beverage::{chain_description, chain_price, Beverage};

/// A condiment wraps exactly one beverage and adds its own suffix and
/// surcharge on top of it.
///
/// The wrapped beverage is required at construction, so a condiment with
/// nothing inside cannot be built. The surcharge may be negative.
pub trait Condiment: Beverage + Sized {
    const SUFFIX: &'static str;
    const SURCHARGE: Price;

    fn inner(&self) -> &dyn Beverage;

    /// `inner().describe()` followed by this condiment's suffix, computed
    /// without recursing once per layer
    fn describe_chain(&self) -> String {
        chain_description(self)
    }

    /// `inner().price()` plus this condiment's surcharge, computed without
    /// recursing once per layer
    fn price_chain(&self) -> Price {
        chain_price(self)
    }
}

/// Left behind in a condiment whose chain has been handed over, so the
/// condiment can still be dropped.
#[derive(Debug)]
struct Detached;

impl Beverage for Detached {
    fn label(&self) -> &'static str {
        ""
    }

    fn describe(&self) -> String {
        String::new()
    }

    fn price(&self) -> Price {
        Price::ZERO
    }

    fn own_price(&self) -> Price {
        Price::ZERO
    }
}

fn take_chain(slot: &mut Box<dyn Beverage>) -> Box<dyn Beverage> {
    mem::replace(slot, Box::new(Detached))
}

/// Unlink a chain one layer at a time. Letting the nested boxes drop on
/// their own recurses once per layer.
fn unlink(mut next: Option<Box<dyn Beverage>>) {
    while let Some(mut layer) = next {
        next = layer.detach();
    }
}

#[derive(Debug)]
pub struct Milk {
    beverage: Box<dyn Beverage>,
}

impl Milk {
    pub fn new(beverage: impl Beverage + 'static) -> Self {
        Self::boxed(Box::new(beverage))
    }

    /// Wrap an already boxed chain without boxing it again
    pub fn boxed(beverage: Box<dyn Beverage>) -> Self {
        Self { beverage }
    }

    pub fn into_inner(mut self) -> Box<dyn Beverage> {
        take_chain(&mut self.beverage)
    }
}

impl Condiment for Milk {
    const SUFFIX: &'static str = "Milk";
    const SURCHARGE: Price = Price::from_cents(20);

    fn inner(&self) -> &dyn Beverage {
        self.beverage.as_ref()
    }
}

impl Beverage for Milk {
    fn label(&self) -> &'static str {
        Self::SUFFIX
    }

    fn describe(&self) -> String {
        self.describe_chain()
    }

    fn price(&self) -> Price {
        self.price_chain()
    }

    fn own_price(&self) -> Price {
        Self::SURCHARGE
    }

    fn wrapped(&self) -> Option<&dyn Beverage> {
        Some(self.inner())
    }

    fn detach(&mut self) -> Option<Box<dyn Beverage>> {
        Some(take_chain(&mut self.beverage))
    }
}

impl Drop for Milk {
    fn drop(&mut self) {
        unlink(self.detach());
    }
}

#[derive(Debug)]
pub struct Sugar {
    beverage: Box<dyn Beverage>,
}

impl Sugar {
    pub fn new(beverage: impl Beverage + 'static) -> Self {
        Self::boxed(Box::new(beverage))
    }

    /// Wrap an already boxed chain without boxing it again
    pub fn boxed(beverage: Box<dyn Beverage>) -> Self {
        Self { beverage }
    }

    pub fn into_inner(mut self) -> Box<dyn Beverage> {
        take_chain(&mut self.beverage)
    }
}

impl Condiment for Sugar {
    const SUFFIX: &'static str = "Sugar";
    const SURCHARGE: Price = Price::from_cents(15);

    fn inner(&self) -> &dyn Beverage {
        self.beverage.as_ref()
    }
}

impl Beverage for Sugar {
    fn label(&self) -> &'static str {
        Self::SUFFIX
    }

    fn describe(&self) -> String {
        self.describe_chain()
    }

    fn price(&self) -> Price {
        self.price_chain()
    }

    fn own_price(&self) -> Price {
        Self::SURCHARGE
    }

    fn wrapped(&self) -> Option<&dyn Beverage> {
        Some(self.inner())
    }

    fn detach(&mut self) -> Option<Box<dyn Beverage>> {
        Some(take_chain(&mut self.beverage))
    }
}

impl Drop for Sugar {
    fn drop(&mut self) {
        unlink(self.detach());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drinks::{Espresso, HouseBlend};

    #[test]
    fn test_condiment_appends_suffix_and_surcharge() {
        let base = HouseBlend;
        let milk = Milk::new(base);
        assert_eq!(milk.describe(), format!("{}, {}", base.describe(), Milk::SUFFIX));
        assert_eq!(milk.price(), base.price() + Milk::SURCHARGE);

        let sugar = Sugar::new(Espresso);
        assert_eq!(sugar.describe(), "Espresso, Sugar");
        assert_eq!(sugar.price(), Price::from_cents(214));
    }

    #[test]
    fn test_into_inner_returns_chain_below() {
        let drink = Sugar::new(Milk::new(Espresso));
        let inner = drink.into_inner();
        assert_eq!(inner.describe(), "Espresso, Milk");
        assert_eq!(inner.price(), Price::from_cents(219));
    }

    #[test]
    fn test_boxed_does_not_add_a_layer() {
        let chain: Box<dyn Beverage> = Box::new(Milk::new(Espresso));
        let drink = Sugar::boxed(chain);
        assert_eq!(drink.depth(), 2);
        assert_eq!(drink.describe(), "Espresso, Milk, Sugar");
    }

    #[test]
    fn test_detach_leaves_an_empty_layer() {
        let mut drink = Milk::new(Sugar::new(Espresso));
        let below = drink.detach().unwrap();

        assert_eq!(below.describe(), "Espresso, Sugar");
        assert_eq!(drink.wrapped().map(|inner| inner.price()), Some(Price::ZERO));

        let mut plain = Espresso;
        assert!(plain.detach().is_none());
    }
}
