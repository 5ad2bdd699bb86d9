//! # Review Module
//!
//! The review form's draft, its submission state machine, and the list of
//! accepted reviews.
//!
//! ## Form States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                 submit (valid)                                          │
//! │   ┌─────────┐ ─────────────────────────────► ┌──────────┐               │
//! │   │ Editing │                                │ Accepted │               │
//! │   └─────────┘ ◄───────────────────────────── └──────────┘               │
//! │        │          draft edited                    ▲                     │
//! │        │ submit (invalid)                         │ submit (valid)      │
//! │        ▼                                          │                     │
//! │   ┌──────────────────┐ ───────────────────────────┘                     │
//! │   │ Invalid(errors)  │                                                  │
//! │   └──────────────────┘ ◄──┐                                             │
//! │            │              │ submit (invalid): errors REPLACED           │
//! │            └──────────────┘                                             │
//! │                                                                         │
//! │  Invalid keeps the draft so the user can correct it.                    │
//! │  Accepted clears the draft.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::types::{Rating, Recommendation, Review};
use crate::validation::{missing_fields, validate_review_draft, ValidationResult};

// =============================================================================
// Draft
// =============================================================================

/// In-progress review form contents.
///
/// The presentation layer copies input into the draft through the setters
/// and reads it back through the getters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    name: Option<String>,
    review: Option<String>,
    rating: Option<Rating>,
    recommendation: Option<Recommendation>,
}

impl ReviewDraft {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn review(&self) -> Option<&str> {
        self.review.as_deref()
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn recommendation(&self) -> Option<Recommendation> {
        self.recommendation
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn set_review(&mut self, review: impl Into<String>) {
        self.review = Some(review.into());
    }

    /// Stores the rating, or clears it when `stars` is outside 1..=5.
    pub fn set_rating(&mut self, stars: u8) {
        self.rating = Rating::new(stars);
    }

    pub fn set_recommendation(&mut self, recommendation: Recommendation) {
        self.recommendation = Some(recommendation);
    }

    pub fn clear(&mut self) {
        *self = ReviewDraft::default();
    }

    /// Builds the review the draft describes, stamped with the current time.
    fn to_review(&self) -> ValidationResult<Review> {
        validate_review_draft(self)?;
        match (&self.name, &self.review, self.rating, self.recommendation) {
            (Some(name), Some(review), Some(rating), Some(recommendation)) => Ok(Review {
                name: name.clone(),
                review: review.clone(),
                rating,
                recommendation,
                submitted_at: Utc::now(),
            }),
            _ => Err(ValidationError::Required {
                fields: missing_fields(self),
            }),
        }
    }
}

// =============================================================================
// Form State
// =============================================================================

/// Where the review form stands after the last action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum FormState {
    #[default]
    Editing,
    Invalid { errors: Vec<String> },
    Accepted,
}

// =============================================================================
// Review Collection
// =============================================================================

/// Accepted reviews plus the form that feeds them.
///
/// ## Invariants
/// - Reviews are append-only, in submission order
/// - Only a validated draft becomes a review
#[derive(Debug, Clone, Default)]
pub struct ReviewCollection {
    reviews: Vec<Review>,
    draft: ReviewDraft,
    state: FormState,
}

impl ReviewCollection {
    pub fn new() -> Self {
        ReviewCollection::default()
    }

    // -------------------------------------------------------------------------
    // Draft binding
    // -------------------------------------------------------------------------

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    /// Write access to the draft.
    ///
    /// Starting a new review after an accepted one returns the form to
    /// `Editing`. Outstanding errors stay visible until the next submit.
    pub fn draft_mut(&mut self) -> &mut ReviewDraft {
        if self.state == FormState::Accepted {
            self.state = FormState::Editing;
        }
        &mut self.draft
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validates the held draft and, if complete, appends it.
    ///
    /// ## Outcomes
    /// - Valid: review appended, draft and errors cleared, state `Accepted`
    /// - Invalid: nothing appended, draft kept, errors replaced, state
    ///   `Invalid`, returns [`CoreError::Validation`]
    ///
    /// [`CoreError::Validation`]: crate::error::CoreError::Validation
    pub fn submit(&mut self) -> CoreResult<&Review> {
        let review = match self.draft.to_review() {
            Ok(review) => review,
            Err(err) => {
                let errors = err.messages();
                debug!(?errors, "review rejected");
                self.state = FormState::Invalid { errors };
                return Err(err.into());
            }
        };

        self.reviews.push(review);
        self.draft.clear();
        self.state = FormState::Accepted;
        info!(count = self.reviews.len(), "review accepted");

        Ok(&self.reviews[self.reviews.len() - 1])
    }

    /// Replaces the held draft with `candidate`, then submits.
    pub fn submit_candidate(&mut self, candidate: ReviewDraft) -> CoreResult<&Review> {
        self.draft = candidate;
        self.submit()
    }

    // -------------------------------------------------------------------------
    // Readers
    // -------------------------------------------------------------------------

    /// Accepted reviews, oldest first.
    pub fn list(&self) -> impl Iterator<Item = &Review> + '_ {
        self.reviews.iter()
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Messages from the last failed submit; empty otherwise.
    pub fn errors(&self) -> &[String] {
        match &self.state {
            FormState::Invalid { errors } => errors.as_slice(),
            _ => &[],
        }
    }

    /// Mean star rating, `None` before the first review.
    pub fn average_rating(&self) -> Option<f32> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u32 = self.reviews.iter().map(|r| u32::from(r.rating.get())).sum();
        Some(total as f32 / self.reviews.len() as f32)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ReviewField};

    fn complete_draft(name: &str, stars: u8) -> ReviewDraft {
        let mut draft = ReviewDraft::default();
        draft.set_name(name);
        draft.set_review("Warm and fuzzy");
        draft.set_rating(stars);
        draft.set_recommendation(Recommendation::Yes);
        draft
    }

    #[test]
    fn test_valid_submission_is_appended_and_clears_form() {
        let mut reviews = ReviewCollection::new();
        reviews.draft_mut().set_name("Ada");
        reviews.draft_mut().set_review("Warm and fuzzy");
        reviews.draft_mut().set_rating(5);
        reviews.draft_mut().set_recommendation(Recommendation::Yes);

        let accepted = reviews.submit().unwrap().clone();
        assert_eq!(accepted.name, "Ada");
        assert_eq!(accepted.rating.get(), 5);

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews.list().next(), Some(&accepted));
        assert_eq!(reviews.draft(), &ReviewDraft::default());
        assert!(reviews.errors().is_empty());
        assert_eq!(reviews.state(), &FormState::Accepted);
    }

    #[test]
    fn test_missing_rating_only() {
        let mut reviews = ReviewCollection::new();
        let mut draft = complete_draft("Ada", 5);
        draft.set_rating(0);

        let err = reviews.submit_candidate(draft.clone()).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::Required {
                fields: vec![ReviewField::Rating]
            })
        );
        assert_eq!(reviews.errors(), &["Rating required.".to_string()]);
        assert!(reviews.is_empty());
        // Draft kept for correction.
        assert_eq!(reviews.draft(), &draft);
    }

    #[test]
    fn test_errors_are_replaced_not_accumulated() {
        let mut reviews = ReviewCollection::new();
        assert!(reviews.submit().is_err());
        assert_eq!(reviews.errors().len(), 4);

        reviews.draft_mut().set_name("Ada");
        reviews.draft_mut().set_review("Warm and fuzzy");
        reviews.draft_mut().set_recommendation(Recommendation::NotSure);
        assert!(reviews.submit().is_err());
        assert_eq!(reviews.errors(), &["Rating required.".to_string()]);

        reviews.draft_mut().set_rating(3);
        assert!(reviews.submit().is_ok());
        assert!(reviews.errors().is_empty());
        assert_eq!(reviews.len(), 1);
    }

    #[test]
    fn test_state_transitions() {
        let mut reviews = ReviewCollection::new();
        assert_eq!(reviews.state(), &FormState::Editing);

        reviews.submit().unwrap_err();
        assert!(matches!(reviews.state(), FormState::Invalid { .. }));

        // Editing while invalid keeps the errors on screen.
        reviews.draft_mut().set_name("Ada");
        assert!(matches!(reviews.state(), FormState::Invalid { .. }));

        reviews.submit_candidate(complete_draft("Ada", 4)).unwrap();
        assert_eq!(reviews.state(), &FormState::Accepted);

        reviews.draft_mut().set_name("Grace");
        assert_eq!(reviews.state(), &FormState::Editing);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut reviews = ReviewCollection::new();
        for (name, stars) in [("Ada", 5), ("Grace", 3), ("Linus", 4)] {
            reviews.submit_candidate(complete_draft(name, stars)).unwrap();
        }

        let names: Vec<&str> = reviews.list().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace", "Linus"]);
        assert_eq!(reviews.list().count(), 3);
        assert_eq!(reviews.average_rating(), Some(4.0));
    }

    #[test]
    fn test_average_rating_empty() {
        assert_eq!(ReviewCollection::new().average_rating(), None);
    }

    #[test]
    fn test_draft_deserializes_rating_range() {
        let draft: ReviewDraft =
            serde_json::from_str(r#"{"name": "Ada", "rating": 4, "recommendation": "NotSure"}"#)
                .unwrap();
        assert_eq!(draft.rating().map(|r| r.get()), Some(4));
        assert_eq!(draft.review(), None);

        let out_of_range: Result<ReviewDraft, _> = serde_json::from_str(r#"{"rating": 9}"#);
        assert!(out_of_range.is_err());
    }
}
