//! # Storefront Aggregate
//!
//! The explicitly constructed owner of the product, both carts and the
//! reviews. Built once at startup and handed to every command.

use sockshop_core::{CounterCart, IdentityCart, ProductCatalogEntry, ReviewCollection};

use super::config::{ConfigError, ConfigState};

/// Session state for one product card.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub catalog: ProductCatalogEntry,
    pub cart: IdentityCart,
    pub counter: CounterCart,
    pub reviews: ReviewCollection,
    pub premium: bool,
}

impl Storefront {
    /// Wraps a product with empty carts and no reviews.
    pub fn new(catalog: ProductCatalogEntry, premium: bool) -> Self {
        Storefront {
            catalog,
            cart: IdentityCart::new(),
            counter: CounterCart::new(),
            reviews: ReviewCollection::new(),
            premium,
        }
    }

    /// Loads the configured product and builds the session around it.
    pub fn from_config(config: &ConfigState) -> Result<Self, ConfigError> {
        let catalog = config.load_catalog()?;
        Ok(Storefront::new(catalog, config.premium))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_starts_empty() {
        let config = ConfigState {
            premium: true,
            ..ConfigState::default()
        };
        let store = Storefront::from_config(&config).unwrap();

        assert!(store.premium);
        assert!(store.cart.is_empty());
        assert_eq!(store.counter.count(), 0);
        assert!(store.reviews.is_empty());
        assert_eq!(store.catalog.selected_index(), 0);
    }
}
