//! # Commands Module
//!
//! All actions the presentation layer can take on the product card.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (line parsing, dispatch)
//! ├── product.rs  ◄─── Product card, swatch selection
//! ├── cart.rs     ◄─── Add/remove buttons
//! └── review.rs   ◄─── Review form and list
//! ```
//!
//! ## Line Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line              Command                 stdout (JSON)          │
//! │  ──────────              ───────                 ─────────────          │
//! │  product                 GetProduct              ProductView            │
//! │  select 1                SelectVariant(1)        ProductView            │
//! │  add                     AddToCart               CartView               │
//! │  remove                  RemoveFromCart          CartView               │
//! │  cart                    GetCart                 CartView               │
//! │  name Ada                SetField(Name, "Ada")   ReviewFormView         │
//! │  review Warm and fuzzy   SetField(Review, ...)   ReviewFormView         │
//! │  rating 5                SetField(Rating, "5")   ReviewFormView         │
//! │  recommend yes           SetField(Recom.., ...)  ReviewFormView         │
//! │  form                    GetReviewForm           ReviewFormView         │
//! │  submit                  SubmitReview            ReviewSubmission       │
//! │  reviews                 ListReviews             ReviewsView            │
//! │  quit                    Quit                    (session ends)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod product;
pub mod review;

use serde::Serialize;
use serde_json::Value;
use sockshop_core::ReviewField;

use crate::error::ApiError;
use crate::state::Storefront;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetProduct,
    SelectVariant(usize),
    AddToCart,
    RemoveFromCart,
    GetCart,
    SetReviewField(ReviewField, String),
    GetReviewForm,
    SubmitReview,
    ListReviews,
    Quit,
}

impl Command {
    /// Parses one input line. The first word names the command; the rest of
    /// the line, trimmed, is its argument.
    pub fn parse(line: &str) -> Result<Self, ApiError> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "product" => Command::GetProduct,
            "select" => {
                let index = arg.parse::<usize>().map_err(|_| {
                    ApiError::bad_command(format!("select needs a variant index, got '{}'", arg))
                })?;
                Command::SelectVariant(index)
            }
            "add" => Command::AddToCart,
            "remove" => Command::RemoveFromCart,
            "cart" => Command::GetCart,
            "name" => Command::SetReviewField(ReviewField::Name, arg.to_string()),
            "review" => Command::SetReviewField(ReviewField::Review, arg.to_string()),
            "rating" => Command::SetReviewField(ReviewField::Rating, arg.to_string()),
            "recommend" => Command::SetReviewField(ReviewField::Recommendation, arg.to_string()),
            "form" => Command::GetReviewForm,
            "submit" => Command::SubmitReview,
            "reviews" => Command::ListReviews,
            "quit" | "exit" => Command::Quit,
            "" => return Err(ApiError::bad_command("empty command")),
            other => return Err(ApiError::bad_command(format!("unknown command '{}'", other))),
        };
        Ok(command)
    }
}

/// Runs a command against the storefront and serializes its response.
///
/// `Quit` is handled by the session loop and answers `null` here.
pub fn dispatch(store: &mut Storefront, command: Command) -> Result<Value, ApiError> {
    match command {
        Command::GetProduct => to_value(product::get_product(store)),
        Command::SelectVariant(index) => to_value(product::select_variant(store, index)?),
        Command::AddToCart => to_value(cart::add_to_cart(store)?),
        Command::RemoveFromCart => to_value(cart::remove_from_cart(store)),
        Command::GetCart => to_value(cart::get_cart(store)),
        Command::SetReviewField(field, value) => {
            to_value(review::set_review_field(store, field, &value)?)
        }
        Command::GetReviewForm => to_value(review::get_review_form(store)),
        Command::SubmitReview => to_value(review::submit_review(store)?),
        Command::ListReviews => to_value(review::list_reviews(store)),
        Command::Quit => Ok(Value::Null),
    }
}

fn to_value(response: impl Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(response)
        .map_err(|e| ApiError::internal(format!("failed to serialize response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("product").unwrap(), Command::GetProduct);
        assert_eq!(Command::parse("  select 1 ").unwrap(), Command::SelectVariant(1));
        assert_eq!(
            Command::parse("review Warm and  fuzzy").unwrap(),
            Command::SetReviewField(ReviewField::Review, "Warm and  fuzzy".to_string())
        );
        assert_eq!(
            Command::parse("RECOMMEND notsure").unwrap(),
            Command::SetReviewField(ReviewField::Recommendation, "notsure".to_string())
        );
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        assert_eq!(Command::parse("").unwrap_err().code, ErrorCode::BadCommand);
        assert_eq!(Command::parse("select").unwrap_err().code, ErrorCode::BadCommand);
        assert_eq!(Command::parse("select -1").unwrap_err().code, ErrorCode::BadCommand);
        assert_eq!(Command::parse("checkout").unwrap_err().code, ErrorCode::BadCommand);
    }

    #[test]
    fn test_dispatch_session() {
        let mut store = Storefront::from_config(&ConfigState::default()).unwrap();

        let cart = dispatch(&mut store, Command::AddToCart).unwrap();
        assert_eq!(cart["counter"], 1);

        let product = dispatch(&mut store, Command::SelectVariant(1)).unwrap();
        assert_eq!(product["inStock"], false);

        let err = dispatch(&mut store, Command::AddToCart).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);

        let err = dispatch(&mut store, Command::SubmitReview).unwrap_err();
        assert_eq!(err.details.len(), 4);
    }
}
