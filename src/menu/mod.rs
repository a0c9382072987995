//! Menu catalogs - the finite sets of foods and drinks customers can order
//!
//! Both catalogs are fixed for a run. Orders are drawn uniformly and
//! independently from each catalog using an injected RNG, so order streams
//! are reproducible from a seed.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A kind of sushi the kitchen can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    Octopus,
    Scallop,
    Salmon,
    Tuna,
}

impl FoodKind {
    pub const ALL: [FoodKind; 4] = [Self::Octopus, Self::Scallop, Self::Salmon, Self::Tuna];

    /// Display name for menus and order bubbles
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Octopus => "Octopus Sushi",
            Self::Scallop => "Scallop Sushi",
            Self::Salmon => "Salmon Sushi",
            Self::Tuna => "Tuna Sushi",
        }
    }

    /// Draw a kind uniformly at random
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A kind of drink the bar can pour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrinkKind {
    Sake,
    Beer,
    MisoSoup,
}

impl DrinkKind {
    pub const ALL: [DrinkKind; 3] = [Self::Sake, Self::Beer, Self::MisoSoup];

    /// Display name for menus and order bubbles
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sake => "Sake",
            Self::Beer => "Beer",
            Self::MisoSoup => "Miso Soup",
        }
    }

    /// Draw a kind uniformly at random
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// The two delivery categories of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Food,
    Drink,
}

/// One concrete deliverable item: a plated sushi or a poured drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuItem {
    Food(FoodKind),
    Drink(DrinkKind),
}

impl MenuItem {
    pub fn category(&self) -> ItemCategory {
        match self {
            Self::Food(_) => ItemCategory::Food,
            Self::Drink(_) => ItemCategory::Drink,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Food(kind) => kind.display_name(),
            Self::Drink(kind) => kind.display_name(),
        }
    }
}

/// A customer's requested food+drink pair
///
/// Immutable once drawn; a seat never re-rolls its order while occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub food: FoodKind,
    pub drink: DrinkKind,
}

impl Order {
    /// Draw a fresh order, one uniform pick per catalog
    pub fn draw(rng: &mut impl Rng) -> Self {
        Self {
            food: FoodKind::sample(rng),
            drink: DrinkKind::sample(rng),
        }
    }
}
