use brew_shared::Price;
use std::fmt;

/// Anything that can be sold as a drink: a plain base drink or a base drink
/// wrapped in one or more condiments.
///
/// Both `describe` and `price` are pure. Calling them repeatedly on the same
/// chain yields identical results.
pub trait Beverage: fmt::Debug + Send + Sync {
    /// This layer's own fragment: the drink name for a base drink, the
    /// condiment suffix for a wrapper.
    fn label(&self) -> &'static str;

    /// Human-readable description of the whole chain below and including this layer
    fn describe(&self) -> String;

    /// Total price of the whole chain below and including this layer
    fn price(&self) -> Price;

    /// What this layer alone adds: the base cost for a drink, the surcharge
    /// for a condiment.
    fn own_price(&self) -> Price;

    /// The beverage this layer wraps, `None` for a base drink
    fn wrapped(&self) -> Option<&dyn Beverage> {
        None
    }

    /// Hand over the owned chain beneath this layer, leaving an empty stub in
    /// its place. Used to tear long chains down without recursing.
    fn detach(&mut self) -> Option<Box<dyn Beverage>> {
        None
    }

    /// Number of condiments applied above the base drink
    fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.wrapped();
        while let Some(layer) = current {
            depth += 1;
            current = layer.wrapped();
        }
        depth
    }
}

impl<B: Beverage + ?Sized> Beverage for Box<B> {
    fn label(&self) -> &'static str {
        (**self).label()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn price(&self) -> Price {
        (**self).price()
    }

    fn own_price(&self) -> Price {
        (**self).own_price()
    }

    fn wrapped(&self) -> Option<&dyn Beverage> {
        (**self).wrapped()
    }

    fn detach(&mut self) -> Option<Box<dyn Beverage>> {
        (**self).detach()
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}

// Borrowed chains can be read but not torn down, so `detach` keeps its default.
impl<B: Beverage + ?Sized> Beverage for &B {
    fn label(&self) -> &'static str {
        (**self).label()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn price(&self) -> Price {
        (**self).price()
    }

    fn own_price(&self) -> Price {
        (**self).own_price()
    }

    fn wrapped(&self) -> Option<&dyn Beverage> {
        (**self).wrapped()
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}

/// Walks a chain from the outermost layer down to its base drink.
pub fn layers(beverage: &dyn Beverage) -> Layers<'_> {
    Layers { next: Some(beverage) }
}

pub struct Layers<'a> {
    next: Option<&'a dyn Beverage>,
}

impl<'a> Iterator for Layers<'a> {
    type Item = &'a dyn Beverage;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.wrapped();
        Some(current)
    }
}

/// Description of a whole chain: labels from the base drink outward, joined by ", ".
pub fn chain_description(beverage: &dyn Beverage) -> String {
    let mut labels: Vec<&str> = layers(beverage).map(|layer| layer.label()).collect();
    labels.reverse();
    labels.join(", ")
}

/// Price of a whole chain: the sum of every layer's own amount.
pub fn chain_price(beverage: &dyn Beverage) -> Price {
    layers(beverage).map(|layer| layer.own_price()).sum()
}
