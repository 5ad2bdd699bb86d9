//! # Validation Module
//!
//! Presence checks for the review form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                  │
//! │  └── Rating select and radio buttons limit what can be entered          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: ReviewDraft setters                                           │
//! │  └── Ratings outside 1..=5 are stored as absent                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                   │
//! │  └── Every field present and non-blank, reported in fixed order         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ReviewField, ValidationError};
use crate::review::ReviewDraft;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Whether a text field counts as filled in.
///
/// ## Rules
/// - `None` is missing
/// - Empty or whitespace-only text is missing
///
/// ## Example
/// ```rust
/// use sockshop_core::validation::is_present;
///
/// assert!(is_present(Some("Ada")));
/// assert!(!is_present(Some("   ")));
/// assert!(!is_present(None));
/// ```
pub fn is_present(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.trim().is_empty())
}

/// Lists the draft's missing fields in reporting order.
pub fn missing_fields(draft: &ReviewDraft) -> Vec<ReviewField> {
    ReviewField::ALL
        .into_iter()
        .filter(|field| match field {
            ReviewField::Name => !is_present(draft.name()),
            ReviewField::Review => !is_present(draft.review()),
            ReviewField::Rating => draft.rating().is_none(),
            ReviewField::Recommendation => draft.recommendation().is_none(),
        })
        .collect()
}

/// Validates a review draft.
///
/// ## Rules
/// - name, review: present and not blank
/// - rating: present (the setter already enforces 1..=5)
/// - recommendation: present
///
/// All failures are collected, not just the first.
pub fn validate_review_draft(draft: &ReviewDraft) -> ValidationResult<()> {
    let fields = missing_fields(draft);
    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Required { fields })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
