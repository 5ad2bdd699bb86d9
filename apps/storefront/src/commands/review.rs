//! # Review Commands
//!
//! The review form: field edits, submission, and the list under the card.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Name:   [Ada        ]  ──► set_review_field(Name, "Ada")              │
//! │  Review: [Warm...    ]  ──► set_review_field(Review, "Warm...")        │
//! │  Rating: [5 ▾]          ──► set_review_field(Rating, "5")              │
//! │  (•) Yes ( ) No ( ) Not sure                                            │
//! │  [Submit] ──► submit_review()                                           │
//! │                 ├── Ok  ──► ReviewSubmission { review, totalReviews }   │
//! │                 └── Err ──► VALIDATION_ERROR, details = messages        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use sockshop_core::{FormState, Recommendation, Review, ReviewDraft, ReviewField};
use tracing::debug;

use crate::error::ApiError;
use crate::state::Storefront;

/// One accepted review, as listed under the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView {
    pub name: String,
    pub review: String,
    pub rating: u8,
    pub recommendation: String,
    pub submitted_at: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        ReviewView {
            name: review.name.clone(),
            review: review.review.clone(),
            rating: review.rating.get(),
            recommendation: review.recommendation.to_string(),
            submitted_at: review.submitted_at.to_rfc3339(),
        }
    }
}

/// The review list section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsView {
    pub reviews: Vec<ReviewView>,
    pub average_rating: Option<f32>,
    /// Shown instead of the list when nothing has been reviewed.
    pub empty_message: Option<&'static str>,
}

/// The form as currently filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFormView {
    pub draft: ReviewDraft,
    pub form: FormState,
    pub errors: Vec<String>,
}

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub review: ReviewView,
    pub total_reviews: usize,
}

fn form_view(store: &Storefront) -> ReviewFormView {
    ReviewFormView {
        draft: store.reviews.draft().clone(),
        form: store.reviews.state().clone(),
        errors: store.reviews.errors().to_vec(),
    }
}

/// Copies one input into the draft.
///
/// ## Arguments
/// * `field` - which input changed
/// * `value` - the raw input text; ratings that are not 1-5 clear the rating
pub fn set_review_field(
    store: &mut Storefront,
    field: ReviewField,
    value: &str,
) -> Result<ReviewFormView, ApiError> {
    debug!(?field, "set_review_field command");
    let draft = store.reviews.draft_mut();

    match field {
        ReviewField::Name => draft.set_name(value),
        ReviewField::Review => draft.set_review(value),
        ReviewField::Rating => {
            let stars = value.trim().parse::<u8>().map_err(|_| {
                ApiError::bad_command(format!("rating must be a number, got '{}'", value))
            })?;
            draft.set_rating(stars);
        }
        ReviewField::Recommendation => {
            let recommendation = Recommendation::parse(value).ok_or_else(|| {
                ApiError::bad_command(format!(
                    "recommendation must be yes, no or notsure, got '{}'",
                    value
                ))
            })?;
            draft.set_recommendation(recommendation);
        }
    }

    Ok(form_view(store))
}

/// Gets the form's draft, state and outstanding errors.
pub fn get_review_form(store: &Storefront) -> ReviewFormView {
    debug!("get_review_form command");
    form_view(store)
}

/// Submits the form.
pub fn submit_review(store: &mut Storefront) -> Result<ReviewSubmission, ApiError> {
    debug!("submit_review command");
    let review = ReviewView::from(store.reviews.submit()?);
    Ok(ReviewSubmission {
        review,
        total_reviews: store.reviews.len(),
    })
}

/// Lists accepted reviews, oldest first.
pub fn list_reviews(store: &Storefront) -> ReviewsView {
    debug!("list_reviews command");
    let reviews: Vec<ReviewView> = store.reviews.list().map(ReviewView::from).collect();
    ReviewsView {
        empty_message: reviews.is_empty().then_some("There are no reviews yet."),
        average_rating: store.reviews.average_rating(),
        reviews,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;

    fn store() -> Storefront {
        Storefront::from_config(&ConfigState::default()).unwrap()
    }

    fn fill(store: &mut Storefront, rating: &str) {
        set_review_field(store, ReviewField::Name, "Ada").unwrap();
        set_review_field(store, ReviewField::Review, "Warm and fuzzy").unwrap();
        set_review_field(store, ReviewField::Rating, rating).unwrap();
        set_review_field(store, ReviewField::Recommendation, "yes").unwrap();
    }

    #[test]
    fn test_submit_complete_form() {
        let mut store = store();
        fill(&mut store, "5");

        let submission = submit_review(&mut store).unwrap();
        assert_eq!(submission.review.name, "Ada");
        assert_eq!(submission.review.rating, 5);
        assert_eq!(submission.review.recommendation, "Yes");
        assert_eq!(submission.total_reviews, 1);

        let form = get_review_form(&store);
        assert_eq!(form.draft, ReviewDraft::default());
        assert_eq!(form.form, FormState::Accepted);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_submit_without_rating_lists_one_error() {
        let mut store = store();
        fill(&mut store, "0");

        let err = submit_review(&mut store).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.details, vec!["Rating required.".to_string()]);
        assert!(list_reviews(&store).reviews.is_empty());

        // Draft kept for correction.
        let form = get_review_form(&store);
        assert_eq!(form.draft.name(), Some("Ada"));
        assert_eq!(form.errors, vec!["Rating required.".to_string()]);
    }

    #[test]
    fn test_bad_field_values() {
        let mut store = store();
        let err = set_review_field(&mut store, ReviewField::Rating, "five").unwrap_err();
        assert_eq!(err.code, ErrorCode::BadCommand);

        let err =
            set_review_field(&mut store, ReviewField::Recommendation, "perhaps").unwrap_err();
        assert_eq!(err.code, ErrorCode::BadCommand);
    }

    #[test]
    fn test_list_reviews() {
        let mut store = store();
        let empty = list_reviews(&store);
        assert_eq!(empty.empty_message, Some("There are no reviews yet."));
        assert_eq!(empty.average_rating, None);

        fill(&mut store, "4");
        submit_review(&mut store).unwrap();
        fill(&mut store, "2");
        submit_review(&mut store).unwrap();

        let view = list_reviews(&store);
        assert_eq!(view.empty_message, None);
        assert_eq!(view.reviews.len(), 2);
        assert_eq!(view.reviews[0].rating, 4);
        assert_eq!(view.reviews[1].rating, 2);
        assert_eq!(view.average_rating, Some(3.0));
    }
}
