use brew_catalog::{Beverage, Condiment, Espresso, HouseBlend, LineKind, Milk, Price, Receipt, Sugar};
use std::thread;

#[test]
fn test_espresso_only() {
    let drink: Box<dyn Beverage> = Box::new(Espresso);
    assert_eq!(drink.describe(), "Espresso");
    assert_eq!(drink.price(), Price::from_cents(199));
}

#[test]
fn test_espresso_with_milk() {
    let drink: Box<dyn Beverage> = Box::new(Milk::new(Espresso));
    assert_eq!(drink.describe(), "Espresso, Milk");
    assert_eq!(drink.price(), Price::from_cents(219));
}

#[test]
fn test_house_blend_with_milk_and_sugar() {
    let mut drink: Box<dyn Beverage> = Box::new(HouseBlend);
    drink = Box::new(Milk::boxed(drink));
    drink = Box::new(Sugar::boxed(drink));
    assert_eq!(drink.describe(), "House Blend Coffee, Milk, Sugar");
    assert_eq!(drink.price(), Price::from_cents(185));
}

#[test]
fn test_wrap_order_changes_description_not_price() {
    let milk_then_sugar = Sugar::new(Milk::new(Espresso));
    let sugar_then_milk = Milk::new(Sugar::new(Espresso));

    assert_eq!(milk_then_sugar.describe(), "Espresso, Milk, Sugar");
    assert_eq!(sugar_then_milk.describe(), "Espresso, Sugar, Milk");
    assert_eq!(milk_then_sugar.price(), sugar_then_milk.price());
}

#[test]
fn test_reads_are_repeatable() {
    let drink = Sugar::new(Milk::new(HouseBlend));
    let first = (drink.describe(), drink.price());
    let second = (drink.describe(), drink.price());
    assert_eq!(first, second);
}

#[test]
fn test_same_condiment_can_repeat() {
    let double_milk = Milk::new(Milk::new(Espresso));
    assert_eq!(double_milk.describe(), "Espresso, Milk, Milk");
    assert_eq!(double_milk.price(), Price::from_cents(239));
}

#[test]
fn test_deep_chain() {
    const DEPTH: usize = 100_000;

    let mut drink: Box<dyn Beverage> = Box::new(HouseBlend);
    for _ in 0..DEPTH {
        drink = Box::new(Sugar::boxed(drink));
    }
    assert_eq!(drink.depth(), DEPTH);
    assert_eq!(drink.price(), Price::from_cents(150 + DEPTH as i64 * 15));

    let description = drink.describe();
    assert!(description.starts_with("House Blend Coffee, Sugar"));
    assert!(description.ends_with(", Sugar, Sugar"));

    let receipt = Receipt::for_beverage(drink.as_ref());
    assert_eq!(receipt.lines.len(), DEPTH + 1);
    assert_eq!(receipt.total, drink.price());

    // dropped here; tearing the chain down must not overflow the stack
}

/// A condiment that takes money off rather than adding it.
#[derive(Debug)]
struct LoyaltyDiscount {
    beverage: Box<dyn Beverage>,
}

impl LoyaltyDiscount {
    fn new(beverage: impl Beverage + 'static) -> Self {
        Self { beverage: Box::new(beverage) }
    }
}

impl Condiment for LoyaltyDiscount {
    const SUFFIX: &'static str = "Loyalty Discount";
    const SURCHARGE: Price = Price::from_cents(-10);

    fn inner(&self) -> &dyn Beverage {
        self.beverage.as_ref()
    }
}

impl Beverage for LoyaltyDiscount {
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
}

#[test]
fn test_negative_surcharge() {
    assert_eq!(LoyaltyDiscount::SURCHARGE.to_string(), "-0.10");

    let discounted = LoyaltyDiscount::new(Espresso);
    assert_eq!(discounted.describe(), "Espresso, Loyalty Discount");
    assert_eq!(discounted.price(), Price::from_cents(189));
    assert_eq!(discounted.price().to_string(), "1.89");

    let drink = Milk::new(LoyaltyDiscount::new(HouseBlend));
    assert_eq!(drink.describe(), "House Blend Coffee, Loyalty Discount, Milk");
    assert_eq!(drink.price(), Price::from_cents(160));

    let receipt = Receipt::for_beverage(&drink);
    assert_eq!(receipt.lines[1].kind, LineKind::Condiment);
    assert_eq!(receipt.lines[1].amount, Price::from_cents(-10));
    assert_eq!(receipt.total, receipt.lines.iter().map(|line| line.amount).sum::<Price>());
    assert_eq!(receipt.total, drink.price());
    assert_eq!(receipt.condiment_total(), Price::from_cents(10));
}

#[test]
fn test_shared_chain_readable_across_threads() {
    let drink = Sugar::new(Milk::new(HouseBlend));
    let expected = drink.describe();
    let shared = &drink;

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(move |_| scope.spawn(move || (shared.describe(), shared.price())))
            .collect();
        for handle in handles {
            let (description, price) = handle.join().unwrap();
            assert_eq!(description, expected);
            assert_eq!(price, Price::from_cents(185));
        }
    });
}
