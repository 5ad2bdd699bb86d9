//! # Cart Module
//!
//! The two cart shapes the product card drives.
//!
//! ## Addressing Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  IdentityCart (knows WHAT is in the cart)                               │
//! │  ─────────────────────────────────────────                              │
//! │  add(2234)    ──► [2234 ×1]                                             │
//! │  add(2234)    ──► [2234 ×2]                                             │
//! │  add(2235)    ──► [2234 ×2, 2235 ×1]                                    │
//! │  remove(2234) ──► [2234 ×1, 2235 ×1]   one occurrence, never all        │
//! │  remove(9999) ──► unchanged            absent id is a no-op             │
//! │                                                                         │
//! │  CounterCart (knows only HOW MANY)                                      │
//! │  ─────────────────────────────────                                      │
//! │  increment()  ──► 1                                                     │
//! │  decrement()  ──► 0                                                     │
//! │  decrement()  ──► 0                    clamped, never negative          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::types::VariantId;

// =============================================================================
// Identity-Addressed Cart
// =============================================================================

/// One variant and how many of it the cart holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub variant_id: VariantId,
    pub quantity: u32,
}

/// A multiset of variant ids.
///
/// ## Invariants
/// - Lines are unique by `variant_id`
/// - Every line has `quantity > 0` (a line reaching zero is dropped)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityCart {
    lines: Vec<CartLine>,
}

impl IdentityCart {
    pub fn new() -> Self {
        IdentityCart { lines: Vec::new() }
    }

    /// Adds one unit of `variant_id`. Always succeeds.
    pub fn add(&mut self, variant_id: VariantId) {
        match self.lines.iter_mut().find(|l| l.variant_id == variant_id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                variant_id,
                quantity: 1,
            }),
        }
        debug!(%variant_id, total = self.total_quantity(), "added to cart");
    }

    /// Removes exactly one unit of `variant_id`.
    ///
    /// Returns `false`, leaving the cart unchanged, when the id is not held.
    pub fn remove(&mut self, variant_id: VariantId) -> bool {
        let Some(pos) = self.lines.iter().position(|l| l.variant_id == variant_id) else {
            debug!(%variant_id, "remove ignored, not in cart");
            return false;
        };

        let line = &mut self.lines[pos];
        line.quantity -= 1;
        if line.quantity == 0 {
            // Order of the remaining lines is not part of the contract.
            self.lines.swap_remove(pos);
        }
        debug!(%variant_id, total = self.total_quantity(), "removed from cart");
        true
    }

    /// Every held id, repeated once per unit.
    ///
    /// The iterator borrows the cart and can be recreated at any time.
    pub fn items(&self) -> impl Iterator<Item = VariantId> + '_ {
        self.lines
            .iter()
            .flat_map(|line| std::iter::repeat(line.variant_id).take(line.quantity as usize))
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Units held for one variant.
    pub fn count(&self, variant_id: VariantId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.variant_id == variant_id)
            .map_or(0, |l| l.quantity)
    }

    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Anonymous Counter Cart
// =============================================================================

/// A bare item counter with no identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CounterCart {
    count: u32,
}

impl CounterCart {
    pub fn new() -> Self {
        CounterCart { count: 0 }
    }

    /// Returns the new count.
    pub fn increment(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Returns the new count. Stays at zero when already empty.
    pub fn decrement(&mut self) -> u32 {
        if self.count == 0 {
            debug!("decrement ignored, counter already at zero");
            return 0;
        }
        self.count -= 1;
        self.count
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: VariantId = VariantId::new(2234);
    const BLUE: VariantId = VariantId::new(2235);

    fn sorted_items(cart: &IdentityCart) -> Vec<VariantId> {
        let mut items: Vec<VariantId> = cart.items().collect();
        items.sort();
        items
    }

    #[test]
    fn test_add_then_remove_restores_prior_state() {
        let mut cart = IdentityCart::new();
        cart.add(BLUE);
        let before = sorted_items(&cart);

        cart.add(GREEN);
        assert!(cart.remove(GREEN));

        assert_eq!(sorted_items(&cart), before);
        assert_eq!(cart.count(GREEN), 0);
    }

    #[test]
    fn test_remove_on_empty_cart_is_noop() {
        let mut cart = IdentityCart::new();
        assert!(!cart.remove(GREEN));
        assert!(cart.is_empty());
        assert_eq!(cart.items().count(), 0);
    }

    #[test]
    fn test_remove_takes_exactly_one_occurrence() {
        let mut cart = IdentityCart::new();
        cart.add(GREEN);
        cart.add(GREEN);
        cart.add(GREEN);
        cart.add(BLUE);

        assert!(cart.remove(GREEN));

        assert_eq!(cart.count(GREEN), 2);
        assert_eq!(cart.count(BLUE), 1);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_items_is_restartable() {
        let mut cart = IdentityCart::new();
        cart.add(GREEN);
        cart.add(GREEN);
        cart.add(BLUE);

        assert_eq!(sorted_items(&cart), vec![GREEN, GREEN, BLUE]);
        assert_eq!(cart.items().count(), 3);
        assert_eq!(cart.items().count(), 3);
    }

    #[test]
    fn test_lines_are_unique_by_variant() {
        let mut cart = IdentityCart::new();
        cart.add(GREEN);
        cart.add(GREEN);

        assert_eq!(
            cart.lines(),
            &[CartLine {
                variant_id: GREEN,
                quantity: 2
            }]
        );

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_counter_clamps_at_zero() {
        let mut counter = CounterCart::new();
        assert_eq!(counter.decrement(), 0);

        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.decrement(), 1);
        assert_eq!(counter.decrement(), 0);
        assert_eq!(counter.decrement(), 0);
        assert_eq!(counter.count(), 0);
    }
}
