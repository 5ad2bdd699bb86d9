//! # Catalog Module
//!
//! The product on display and its selectable variants.
//!
//! ## Derived Values
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  What the card reads after every action                 │
//! │                                                                         │
//! │  stored                         derived on read                         │
//! │  ──────                         ───────────────                         │
//! │  brand, name ─────────────────► title          "Vue Mastery Socks"      │
//! │  variants[selected].image ────► display_image                           │
//! │  variants[selected].quantity ─► stock_level ──► in_stock, stock_tier    │
//! │  on_sale ─────────────────────► sale_message                            │
//! │  standard_shipping + premium ─► shipping_cost  "Free" | "$2.99"         │
//! │                                                                         │
//! │  Nothing on the right is cached, so a read right after                  │
//! │  select_variant() can never observe the previous variant.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use ts_rs::TS;

use crate::error::{CatalogError, CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Shipping, StockTier, Variant, VariantId};
use crate::STANDARD_SHIPPING_CENTS;

// =============================================================================
// Product Catalog Entry
// =============================================================================

/// The product shown on the card.
///
/// ## Invariants
/// - `variants` is non-empty
/// - variant ids are unique
/// - `selected_variant` is always a valid index into `variants`
///
/// Deserialization goes through [`ProductSpec`] so both invariants are checked
/// on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductSpec", into = "ProductSpec")]
pub struct ProductCatalogEntry {
    brand: String,
    name: String,
    description: String,
    alt_text: String,
    details: Vec<String>,
    sizes: Vec<String>,
    on_sale: bool,
    link: String,
    standard_shipping: Money,
    variants: Vec<Variant>,
    selected_variant: usize,
}

/// Serialized shape of a product, as written in catalog files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpec {
    pub brand: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub link: String,
    #[serde(default = "default_shipping")]
    pub standard_shipping: Money,
    pub variants: Vec<Variant>,
}

fn default_shipping() -> Money {
    Money::from_cents(STANDARD_SHIPPING_CENTS)
}

impl TryFrom<ProductSpec> for ProductCatalogEntry {
    type Error = CatalogError;

    fn try_from(spec: ProductSpec) -> Result<Self, Self::Error> {
        if spec.variants.is_empty() {
            return Err(CatalogError::NoVariants);
        }

        let mut seen = HashSet::with_capacity(spec.variants.len());
        for variant in &spec.variants {
            if !seen.insert(variant.variant_id) {
                return Err(CatalogError::DuplicateVariant(variant.variant_id));
            }
        }

        Ok(ProductCatalogEntry {
            brand: spec.brand,
            name: spec.name,
            description: spec.description,
            alt_text: spec.alt_text,
            details: spec.details,
            sizes: spec.sizes,
            on_sale: spec.on_sale,
            link: spec.link,
            standard_shipping: spec.standard_shipping,
            variants: spec.variants,
            selected_variant: 0,
        })
    }
}

impl From<ProductCatalogEntry> for ProductSpec {
    fn from(entry: ProductCatalogEntry) -> Self {
        ProductSpec {
            brand: entry.brand,
            name: entry.name,
            description: entry.description,
            alt_text: entry.alt_text,
            details: entry.details,
            sizes: entry.sizes,
            on_sale: entry.on_sale,
            link: entry.link,
            standard_shipping: entry.standard_shipping,
            variants: entry.variants,
        }
    }
}

/// One color swatch, as the presentation layer lays them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Swatch {
    pub index: usize,
    pub variant_id: VariantId,
    pub color: String,
    pub selected: bool,
}

impl ProductCatalogEntry {
    /// Builds an entry with the first variant selected.
    ///
    /// ## Example
    /// ```rust
    /// use sockshop_core::catalog::{ProductCatalogEntry, ProductSpec};
    /// use sockshop_core::money::Money;
    /// use sockshop_core::types::{Variant, VariantId};
    ///
    /// let entry = ProductCatalogEntry::new(ProductSpec {
    ///     brand: "Vue Mastery".into(),
    ///     name: "Socks".into(),
    ///     description: String::new(),
    ///     alt_text: String::new(),
    ///     details: vec![],
    ///     sizes: vec![],
    ///     on_sale: false,
    ///     link: String::new(),
    ///     standard_shipping: Money::from_cents(299),
    ///     variants: vec![Variant {
    ///         variant_id: VariantId::new(2234),
    ///         color: "green".into(),
    ///         image: "green.jpg".into(),
    ///         quantity: Some(10),
    ///     }],
    /// })
    /// .unwrap();
    /// assert_eq!(entry.title(), "Vue Mastery Socks");
    /// ```
    pub fn new(spec: ProductSpec) -> Result<Self, CatalogError> {
        Self::try_from(spec)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Selects the variant at `index` (a swatch hover).
    ///
    /// Fails with [`CoreError::IndexOutOfRange`] and leaves the selection
    /// untouched when `index >= variants.len()`.
    pub fn select_variant(&mut self, index: usize) -> CoreResult<()> {
        let len = self.variants.len();
        if index >= len {
            debug!(index, len, "rejected variant selection");
            return Err(CoreError::IndexOutOfRange { index, len });
        }

        self.selected_variant = index;
        debug!(
            index,
            variant_id = %self.variants[index].variant_id,
            "variant selected"
        );
        Ok(())
    }

    /// Selects a variant by its id.
    pub fn select_variant_by_id(&mut self, variant_id: VariantId) -> CoreResult<()> {
        let index = self
            .variants
            .iter()
            .position(|v| v.variant_id == variant_id)
            .ok_or(CoreError::UnknownVariant(variant_id))?;
        self.select_variant(index)
    }

    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected_variant
    }

    pub fn selected_variant(&self) -> &Variant {
        &self.variants[self.selected_variant]
    }

    pub fn selected_variant_id(&self) -> VariantId {
        self.selected_variant().variant_id
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Swatches in variant order, flagging the selected one.
    pub fn swatches(&self) -> impl Iterator<Item = Swatch> + '_ {
        self.variants
            .iter()
            .enumerate()
            .map(move |(index, variant)| Swatch {
                index,
                variant_id: variant.variant_id,
                color: variant.color.clone(),
                selected: index == self.selected_variant,
            })
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// `brand + " " + name`.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    pub fn display_image(&self) -> &str {
        &self.selected_variant().image
    }

    /// Stock of the selected variant; unknown counts as zero.
    pub fn stock_level(&self) -> u32 {
        self.selected_variant().stock_level()
    }

    /// Drives the add-to-cart button's enabled state.
    pub fn in_stock(&self) -> bool {
        self.stock_level() > 0
    }

    pub fn stock_tier(&self) -> StockTier {
        StockTier::from_level(self.stock_level())
    }

    pub fn sale_message(&self) -> String {
        if self.on_sale {
            format!("{} are on sale!", self.title())
        } else {
            format!("{} are not on sale!", self.title())
        }
    }

    /// Free for premium members, otherwise the flat standard fee.
    pub fn shipping_cost(&self, premium: bool) -> Shipping {
        if premium {
            Shipping::Free
        } else {
            Shipping::Fee(self.standard_shipping)
        }
    }

    // -------------------------------------------------------------------------
    // Stored attributes
    // -------------------------------------------------------------------------

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    pub fn on_sale(&self) -> bool {
        self.on_sale
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
