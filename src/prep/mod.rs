//! Prep station - cutting board and player hand
//!
//! The assembly side of the counter: sushi is built rice-first on the
//! board, then picked up into the hand, which holds at most one item.
//! Drinks go straight from a dispenser into the hand. Pure state; the
//! presentation layer decides what was clicked.

use serde::{Deserialize, Serialize};

use crate::menu::{FoodKind, MenuItem};

/// The cutting board where sushi is assembled
///
/// Rice goes down first, then exactly one topping. A complete board yields
/// the sushi kind named by its topping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CuttingBoard {
    has_rice: bool,
    topping: Option<FoodKind>,
}

impl CuttingBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the rice ball; only one fits
    pub fn add_rice(&mut self) -> bool {
        if self.has_rice {
            return false;
        }
        self.has_rice = true;
        true
    }

    /// Place a topping; requires rice underneath and an empty top
    pub fn add_topping(&mut self, kind: FoodKind) -> bool {
        if !self.has_rice || self.topping.is_some() {
            return false;
        }
        self.topping = Some(kind);
        true
    }

    pub fn has_rice(&self) -> bool {
        self.has_rice
    }

    pub fn topping(&self) -> Option<FoodKind> {
        self.topping
    }

    /// Whether a finished sushi is sitting on the board
    pub fn is_complete(&self) -> bool {
        self.has_rice && self.topping.is_some()
    }

    /// Take the finished sushi off the board, clearing it
    pub fn take_sushi(&mut self) -> Option<FoodKind> {
        if !self.is_complete() {
            return None;
        }
        let kind = self.topping.take();
        self.has_rice = false;
        kind
    }

    /// Scrap whatever is on the board
    pub fn clear(&mut self) {
        self.has_rice = false;
        self.topping = None;
    }
}

/// What the player is carrying
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerHand {
    held: Option<MenuItem>,
}

impl PlayerHand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick up an item; fails if the hand is already full
    pub fn pick_up(&mut self, item: MenuItem) -> bool {
        if self.held.is_some() {
            return false;
        }
        self.held = Some(item);
        true
    }

    /// Hand over whatever is held (e.g. to deliver it to a seat)
    pub fn take(&mut self) -> Option<MenuItem> {
        self.held.take()
    }

    pub fn held(&self) -> Option<MenuItem> {
        self.held
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }
}
