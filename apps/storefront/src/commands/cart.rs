//! # Cart Commands
//!
//! The two cart buttons on the card. Both act on the selected variant and
//! keep the identity cart and the counter in step.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [Add to Cart]        ──► add_to_cart()      cart.add(id), counter + 1  │
//! │    disabled while the selected variant is out of stock                  │
//! │                                                                         │
//! │  [Remove from cart]   ──► remove_from_cart() cart.remove(id), and       │
//! │                                              counter - 1 if removed     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use sockshop_core::{CartLine, IdentityCart, VariantId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::Storefront;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Held variant ids, one entry per unit.
    pub items: Vec<VariantId>,
    pub lines: Vec<CartLine>,
    pub total_quantity: u32,
    /// The header badge.
    pub counter: u32,
}

impl CartView {
    fn build(cart: &IdentityCart, counter: u32) -> Self {
        CartView {
            items: cart.items().collect(),
            lines: cart.lines().to_vec(),
            total_quantity: cart.total_quantity(),
            counter,
        }
    }
}

impl From<&Storefront> for CartView {
    fn from(store: &Storefront) -> Self {
        CartView::build(&store.cart, store.counter.count())
    }
}

/// Gets the current cart contents.
pub fn get_cart(store: &Storefront) -> CartView {
    debug!("get_cart command");
    CartView::from(store)
}

/// Adds the selected variant to the cart.
///
/// ## Behavior
/// - In stock: one unit added, counter incremented
/// - Out of stock: `CART_ERROR`, nothing changes (the disabled button)
pub fn add_to_cart(store: &mut Storefront) -> Result<CartView, ApiError> {
    let variant_id = store.catalog.selected_variant_id();
    debug!(%variant_id, "add_to_cart command");

    if !store.catalog.in_stock() {
        return Err(ApiError::cart(format!(
            "Variant {} is out of stock",
            variant_id
        )));
    }

    store.cart.add(variant_id);
    store.counter.increment();
    Ok(CartView::from(&*store))
}

/// Removes one unit of the selected variant.
///
/// Removing a variant that is not in the cart leaves both carts unchanged.
pub fn remove_from_cart(store: &mut Storefront) -> CartView {
    let variant_id = store.catalog.selected_variant_id();
    debug!(%variant_id, "remove_from_cart command");

    if store.cart.remove(variant_id) {
        store.counter.decrement();
    }
    CartView::from(&*store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;

    const GREEN: VariantId = VariantId::new(2234);

    fn store() -> Storefront {
        Storefront::from_config(&ConfigState::default()).unwrap()
    }

    #[test]
    fn test_add_to_cart_tracks_selected_variant() {
        let mut store = store();
        add_to_cart(&mut store).unwrap();
        let view = add_to_cart(&mut store).unwrap();

        assert_eq!(view.items, vec![GREEN, GREEN]);
        assert_eq!(view.total_quantity, 2);
        assert_eq!(view.counter, 2);
    }

    #[test]
    fn test_add_out_of_stock_is_rejected() {
        let mut store = store();
        store.catalog.select_variant(1).unwrap();

        let err = add_to_cart(&mut store).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert!(store.cart.is_empty());
        assert_eq!(store.counter.count(), 0);
    }

    #[test]
    fn test_add_then_remove_restores_cart() {
        let mut store = store();
        let before = get_cart(&store);

        add_to_cart(&mut store).unwrap();
        let after = remove_from_cart(&mut store);

        assert_eq!(after, before);
    }

    #[test]
    fn test_remove_from_empty_cart_is_noop() {
        let mut store = store();
        let view = remove_from_cart(&mut store);
        assert!(view.items.is_empty());
        assert_eq!(view.counter, 0);
    }

    #[test]
    fn test_remove_other_variant_leaves_counter() {
        let mut store = store();
        add_to_cart(&mut store).unwrap();
        store.catalog.select_variant(1).unwrap();

        let view = remove_from_cart(&mut store);
        assert_eq!(view.items, vec![GREEN]);
        assert_eq!(view.counter, 1);
    }
}
