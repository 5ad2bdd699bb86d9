//! # Error Types
//!
//! Domain-specific error types for sockshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sockshop-core errors (this file)                                      │
//! │  ├── CoreError        - Selection faults, wraps the two below          │
//! │  ├── ValidationError  - Review form fields missing                     │
//! │  └── CatalogError     - Catalog data that breaks an invariant          │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, variant id, field)
//! 3. Errors are enum variants, never String

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use crate::types::VariantId;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the product-state model.
///
/// Neither kind is fatal. Both are handed back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A variant index outside `0..len` was selected.
    ///
    /// ## When This Occurs
    /// Only when a collaborator builds swatches from stale data; swatches
    /// generated from the same variant list never produce this.
    #[error("Variant index {index} out of range (product has {len} variants)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A variant id that the product does not carry was selected.
    #[error("Variant {0} not found")]
    UnknownVariant(VariantId),

    /// Review submission failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Catalog data is unusable.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A required field on the review form.
///
/// Declaration order is the order in which missing-field messages are
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReviewField {
    Name,
    Review,
    Rating,
    Recommendation,
}

impl ReviewField {
    /// All fields, in reporting order.
    pub const ALL: [ReviewField; 4] = [
        ReviewField::Name,
        ReviewField::Review,
        ReviewField::Rating,
        ReviewField::Recommendation,
    ];

    /// The message shown to the user when this field is missing.
    pub const fn required_message(self) -> &'static str {
        match self {
            ReviewField::Name => "Name required.",
            ReviewField::Review => "Review required.",
            ReviewField::Rating => "Rating required.",
            ReviewField::Recommendation => "Recommendation answer required.",
        }
    }
}

/// Input validation errors.
///
/// Expected and user-correctable; surfaced verbatim as a list of messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are missing or empty.
    ///
    /// `fields` is never empty and is sorted in [`ReviewField::ALL`] order.
    #[error("{}", join_messages(.fields))]
    Required { fields: Vec<ReviewField> },
}

impl ValidationError {
    /// The user-facing messages, one per missing field.
    ///
    /// ## Example
    /// ```rust
    /// use sockshop_core::error::{ReviewField, ValidationError};
    ///
    /// let err = ValidationError::Required { fields: vec![ReviewField::Rating] };
    /// assert_eq!(err.messages(), vec!["Rating required.".to_string()]);
    /// ```
    pub fn messages(&self) -> Vec<String> {
        match self {
            ValidationError::Required { fields } => fields
                .iter()
                .map(|field| field.required_message().to_string())
                .collect(),
        }
    }
}

fn join_messages(fields: &[ReviewField]) -> String {
    fields
        .iter()
        .map(|field| field.required_message())
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog data that would break a [`ProductCatalogEntry`] invariant.
///
/// [`ProductCatalogEntry`]: crate::catalog::ProductCatalogEntry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The product has no variants, so nothing can be selected.
    #[error("product must have at least one variant")]
    NoVariants,

    /// Two variants share an id.
    #[error("duplicate variant id {0}")]
    DuplicateVariant(VariantId),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
