//! # sockshop-core: Product-State Model
//!
//! The rules behind the product card: which variant is selected, what the
//! card shows for it, what is in the cart, and which reviews were accepted.
//! Everything here is a pure in-memory state machine with no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sockshop Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (apps/storefront)                  │   │
//! │  │   swatch hover ──► add/remove ──► review form ──► re-render    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain method calls                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ sockshop-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │  review   │  │   money   │  │   │
//! │  │   │  Product  │  │ Identity  │  │  Draft    │  │   Money   │  │   │
//! │  │   │  Variant  │  │ Counter   │  │ Collection│  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO THREADS • DERIVED VALUES COMPUTED ON READ         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The product on display and variant selection
//! - [`cart`] - Identity-addressed and counter carts
//! - [`review`] - Review draft, form state and accepted reviews
//! - [`types`] - Shared value types (Variant, StockTier, Shipping, Rating)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Review form presence checks
//!
//! ## Example Usage
//!
//! ```rust
//! use sockshop_core::cart::IdentityCart;
//! use sockshop_core::catalog::ProductCatalogEntry;
//! use sockshop_core::types::StockTier;
//!
//! let mut product: ProductCatalogEntry = serde_json::from_str(r#"{
//!     "brand": "Vue Mastery",
//!     "name": "Socks",
//!     "variants": [
//!         {"variantId": 2234, "color": "green", "image": "green.jpg", "quantity": 10},
//!         {"variantId": 2235, "color": "blue", "image": "blue.jpg", "quantity": 0}
//!     ]
//! }"#).unwrap();
//! let mut cart = IdentityCart::new();
//!
//! assert_eq!(product.stock_tier(), StockTier::Low);
//! cart.add(product.selected_variant_id());
//!
//! product.select_variant(1).unwrap();
//! assert!(!product.in_stock());
//! assert_eq!(cart.total_quantity(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod review;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartLine, CounterCart, IdentityCart};
pub use catalog::{ProductCatalogEntry, ProductSpec, Swatch};
pub use error::{CatalogError, CoreError, CoreResult, ReviewField, ValidationError};
pub use money::Money;
pub use review::{FormState, ReviewCollection, ReviewDraft};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat shipping fee for non-premium customers, in cents ($2.99).
pub const STANDARD_SHIPPING_CENTS: i64 = 299;
