//! # Product Commands
//!
//! Reading the product card and hovering swatches.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [green] [blue]   ◄── swatches                                          │
//! │     │                                                                   │
//! │  mouse over blue ──► select_variant(1) ──► ProductView                  │
//! │                                              image:  blue.jpg           │
//! │                                              inStock: false             │
//! │                                              addToCartEnabled: false    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use sockshop_core::{StockTier, Swatch};
use tracing::debug;

use crate::error::ApiError;
use crate::state::Storefront;

/// Everything the product card renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub title: String,
    pub image: String,
    pub alt_text: String,
    pub description: String,
    pub stock_level: u32,
    pub stock_tier: StockTier,
    pub stock_label: &'static str,
    pub in_stock: bool,
    pub add_to_cart_enabled: bool,
    pub on_sale: bool,
    pub sale_message: String,
    pub shipping: String,
    pub shipping_cents: i64,
    pub details: Vec<String>,
    pub sizes: Vec<String>,
    pub link: String,
    pub swatches: Vec<Swatch>,
}

impl From<&Storefront> for ProductView {
    fn from(store: &Storefront) -> Self {
        let product = &store.catalog;
        let shipping = product.shipping_cost(store.premium);
        let tier = product.stock_tier();
        ProductView {
            title: product.title(),
            image: product.display_image().to_string(),
            alt_text: product.alt_text().to_string(),
            description: product.description().to_string(),
            stock_level: product.stock_level(),
            stock_tier: tier,
            stock_label: tier.label(),
            in_stock: product.in_stock(),
            add_to_cart_enabled: product.in_stock(),
            on_sale: product.on_sale(),
            sale_message: product.sale_message(),
            shipping: shipping.to_string(),
            shipping_cents: shipping.amount().cents(),
            details: product.details().to_vec(),
            sizes: product.sizes().to_vec(),
            link: product.link().to_string(),
            swatches: product.swatches().collect(),
        }
    }
}

/// Gets the product card.
pub fn get_product(store: &Storefront) -> ProductView {
    debug!("get_product command");
    ProductView::from(store)
}

/// Selects the variant under the pointer.
///
/// ## Returns
/// The re-derived product card, or `NOT_FOUND` for an index past the last
/// swatch (selection unchanged).
pub fn select_variant(store: &mut Storefront, index: usize) -> Result<ProductView, ApiError> {
    debug!(index, "select_variant command");
    store.catalog.select_variant(index)?;
    Ok(ProductView::from(&*store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;

    fn store(premium: bool) -> Storefront {
        let config = ConfigState {
            premium,
            ..ConfigState::default()
        };
        Storefront::from_config(&config).unwrap()
    }

    #[test]
    fn test_get_product_for_default_socks() {
        let view = get_product(&store(false));
        assert_eq!(view.title, "Vue Mastery Socks");
        assert_eq!(view.stock_tier, StockTier::Low);
        assert_eq!(view.stock_label, "Almost sold out");
        assert!(view.add_to_cart_enabled);
        assert_eq!(view.sale_message, "Vue Mastery Socks are on sale!");
        assert_eq!(view.shipping, "$2.99");
        assert_eq!(view.shipping_cents, 299);
        assert_eq!(view.swatches.len(), 2);
    }

    #[test]
    fn test_premium_ships_free() {
        let view = get_product(&store(true));
        assert_eq!(view.shipping, "Free");
        assert_eq!(view.shipping_cents, 0);
    }

    #[test]
    fn test_hovering_blue_disables_add_to_cart() {
        let mut store = store(false);
        let view = select_variant(&mut store, 1).unwrap();

        assert!(!view.in_stock);
        assert!(!view.add_to_cart_enabled);
        assert_eq!(view.stock_tier, StockTier::None);
        assert!(view.image.contains("blue"));
        assert!(view.swatches[1].selected);
    }

    #[test]
    fn test_select_out_of_range_is_not_found() {
        let mut store = store(false);
        let err = select_variant(&mut store, 7).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(store.catalog.selected_index(), 0);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let json = serde_json::to_value(get_product(&store(false))).unwrap();
        assert_eq!(json["addToCartEnabled"], true);
        assert_eq!(json["stockTier"], "low");
        assert_eq!(json["swatches"][0]["variantId"], 2234);
    }
}
