use brew_shared::Price;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::beverage::Beverage;
use crate::condiments::{Condiment, Milk, Sugar};
use crate::drinks::{Espresso, HouseBlend};

/// Base drinks that can be ordered by name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrinkKind {
    Espresso,
    HouseBlend,
}

/// Condiments that can be added by name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CondimentKind {
    Milk,
    Sugar,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("Unknown drink: {0}")]
    UnknownDrink(String),

    #[error("Unknown condiment: {0}")]
    UnknownCondiment(String),
}

pub type MenuResult<T> = Result<T, MenuError>;

/// Lowercase and drop separators so "House Blend", "house-blend" and
/// "house_blend" all match.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl DrinkKind {
    pub const ALL: [DrinkKind; 2] = [DrinkKind::Espresso, DrinkKind::HouseBlend];

    pub fn name(self) -> &'static str {
        match self {
            DrinkKind::Espresso => Espresso::NAME,
            DrinkKind::HouseBlend => HouseBlend::NAME,
        }
    }

    pub fn cost(self) -> Price {
        match self {
            DrinkKind::Espresso => Espresso::COST,
            DrinkKind::HouseBlend => HouseBlend::COST,
        }
    }

    pub fn build(self) -> Box<dyn Beverage> {
        match self {
            DrinkKind::Espresso => Box::new(Espresso),
            DrinkKind::HouseBlend => Box::new(HouseBlend),
        }
    }
}

impl CondimentKind {
    pub const ALL: [CondimentKind; 2] = [CondimentKind::Milk, CondimentKind::Sugar];

    pub fn suffix(self) -> &'static str {
        match self {
            CondimentKind::Milk => Milk::SUFFIX,
            CondimentKind::Sugar => Sugar::SUFFIX,
        }
    }

    pub fn surcharge(self) -> Price {
        match self {
            CondimentKind::Milk => Milk::SURCHARGE,
            CondimentKind::Sugar => Sugar::SURCHARGE,
        }
    }

    pub fn wrap(self, beverage: Box<dyn Beverage>) -> Box<dyn Beverage> {
        match self {
            CondimentKind::Milk => Box::new(Milk::boxed(beverage)),
            CondimentKind::Sugar => Box::new(Sugar::boxed(beverage)),
        }
    }
}

impl fmt::Display for DrinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for CondimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for DrinkKind {
    type Err = MenuError;

    fn from_str(s: &str) -> MenuResult<Self> {
        match normalize(s).as_str() {
            "espresso" => Ok(DrinkKind::Espresso),
            "houseblend" | "houseblendcoffee" => Ok(DrinkKind::HouseBlend),
            _ => Err(MenuError::UnknownDrink(s.to_string())),
        }
    }
}

impl FromStr for CondimentKind {
    type Err = MenuError;

    fn from_str(s: &str) -> MenuResult<Self> {
        match normalize(s).as_str() {
            "milk" => Ok(CondimentKind::Milk),
            "sugar" => Ok(CondimentKind::Sugar),
            _ => Err(MenuError::UnknownCondiment(s.to_string())),
        }
    }
}

/// Build a chain from names. Condiments are applied in the order given, so
/// the last one named ends up outermost.
pub fn compose<S: AsRef<str>>(drink: &str, condiments: &[S]) -> MenuResult<Box<dyn Beverage>> {
    let base = drink.parse::<DrinkKind>()?;
    let kinds = condiments
        .iter()
        .map(|name| name.as_ref().parse::<CondimentKind>())
        .collect::<MenuResult<Vec<_>>>()?;

    let beverage = kinds
        .into_iter()
        .fold(base.build(), |chain, kind| kind.wrap(chain));

    tracing::debug!("Composed '{}' at {}", beverage.describe(), beverage.price());

    Ok(beverage)
}
