//! # Domain Types
//!
//! Value types shared by the catalog, cart and review modules.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Variant      │   │   StockTier     │   │    Shipping     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  variant_id     │   │  High  (> 10)   │   │  Free           │       │
//! │  │  color          │   │  Low   (1..=10) │   │  Fee(Money)     │       │
//! │  │  image          │   │  None  (0)      │   │                 │       │
//! │  │  quantity       │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Review       │   │     Rating      │   │ Recommendation  │       │
//! │  │  name, review   │   │  1..=5          │   │  Yes / No /     │       │
//! │  │  rating, rec.   │   └─────────────────┘   │  NotSure        │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Variant Identity
// =============================================================================

/// Stable identifier of a variant, unique within one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct VariantId(u32);

impl VariantId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        VariantId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Variant
// =============================================================================

/// A purchasable color option of a product.
///
/// Unknown keys are rejected when deserializing, so a misspelled
/// `variantQuantity` fails the load instead of silently reading as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Variant {
    pub variant_id: VariantId,
    pub color: String,
    /// Opaque image URL or path.
    pub image: String,
    /// Units available. `None` means unknown and reads as zero.
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl Variant {
    /// Stock on hand, with unknown read as zero.
    #[inline]
    pub fn stock_level(&self) -> u32 {
        self.quantity.unwrap_or(0)
    }
}

// =============================================================================
// Stock Tier
// =============================================================================

/// Coarse stock bucket used for the availability line on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockTier {
    /// More than ten units.
    High,
    /// One to ten units, inclusive.
    Low,
    /// Nothing left.
    None,
}

impl StockTier {
    /// Threshold above which stock counts as [`StockTier::High`].
    pub const LOW_STOCK_CEILING: u32 = 10;

    /// Buckets a stock level.
    ///
    /// ## Boundaries
    /// ```text
    ///   0        1 ........ 10       11 .......
    ///   None     Low                 High
    /// ```
    pub const fn from_level(level: u32) -> Self {
        if level > Self::LOW_STOCK_CEILING {
            StockTier::High
        } else if level > 0 {
            StockTier::Low
        } else {
            StockTier::None
        }
    }

    /// Text shown next to the product.
    pub const fn label(self) -> &'static str {
        match self {
            StockTier::High => "Big amount",
            StockTier::Low => "Almost sold out",
            StockTier::None => "Not available",
        }
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// Shipping cost for one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Shipping {
    /// Premium members ship for nothing.
    Free,
    /// Flat fee for everyone else.
    Fee(Money),
}

impl Shipping {
    /// The amount charged; zero when free.
    pub const fn amount(&self) -> Money {
        match self {
            Shipping::Free => Money::zero(),
            Shipping::Fee(fee) => *fee,
        }
    }

    #[inline]
    pub const fn is_free(&self) -> bool {
        matches!(self, Shipping::Free)
    }
}

impl fmt::Display for Shipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shipping::Free => f.write_str("Free"),
            Shipping::Fee(fee) => write!(f, "{fee}"),
        }
    }
}

// =============================================================================
// Review Values
// =============================================================================

/// A star rating, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns `None` for values outside 1..=5.
    ///
    /// ## Example
    /// ```rust
    /// use sockshop_core::types::Rating;
    ///
    /// assert_eq!(Rating::new(5).map(|r| r.get()), Some(5));
    /// assert!(Rating::new(0).is_none());
    /// assert!(Rating::new(6).is_none());
    /// ```
    pub const fn new(stars: u8) -> Option<Self> {
        if stars >= Self::MIN && stars <= Self::MAX {
            Some(Rating(stars))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

/// Deserializing goes through [`Rating::new`], so out-of-range input fails.
impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let stars = u8::deserialize(deserializer)?;
        Rating::new(stars).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "rating must be between {} and {}",
                Rating::MIN,
                Rating::MAX
            ))
        })
    }
}

/// Answer to "Would you recommend this product?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Recommendation {
    Yes,
    No,
    NotSure,
}

impl Recommendation {
    /// Parses the form's radio value, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" => Some(Recommendation::Yes),
            "no" => Some(Recommendation::No),
            "notsure" | "not_sure" | "not sure" => Some(Recommendation::NotSure),
            _ => None,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Recommendation::Yes => "Yes",
            Recommendation::No => "No",
            Recommendation::NotSure => "Not sure",
        })
    }
}

// =============================================================================
// Review
// =============================================================================

/// An accepted review. Only produced by a validated submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub name: String,
    pub review: String,
    pub rating: Rating,
    pub recommendation: Recommendation,
    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_tier_boundaries() {
        assert_eq!(StockTier::from_level(0), StockTier::None);
        assert_eq!(StockTier::from_level(1), StockTier::Low);
        assert_eq!(StockTier::from_level(10), StockTier::Low);
        assert_eq!(StockTier::from_level(11), StockTier::High);
    }

    #[test]
    fn test_variant_missing_quantity_reads_as_zero() {
        let variant: Variant = serde_json::from_str(
            r#"{"variantId": 2235, "color": "blue", "image": "blue.jpg"}"#,
        )
        .unwrap();
        assert_eq!(variant.quantity, None);
        assert_eq!(variant.stock_level(), 0);
    }

    #[test]
    fn test_variant_rejects_misspelled_quantity() {
        let result: Result<Variant, _> = serde_json::from_str(
            r#"{"variantId": 2235, "color": "blue", "image": "blue.jpg", "variantQuatnity": 0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_shipping_display() {
        assert_eq!(Shipping::Free.to_string(), "Free");
        assert_eq!(Shipping::Fee(Money::from_cents(299)).to_string(), "$2.99");
        assert!(Shipping::Free.amount().is_zero());
        assert_eq!(Shipping::Fee(Money::from_cents(299)).amount().cents(), 299);
    }

    #[test]
    fn test_recommendation_parse() {
        assert_eq!(Recommendation::parse("Yes"), Some(Recommendation::Yes));
        assert_eq!(Recommendation::parse(" no "), Some(Recommendation::No));
        assert_eq!(Recommendation::parse("NotSure"), Some(Recommendation::NotSure));
        assert_eq!(Recommendation::parse("maybe"), None);
    }
}
