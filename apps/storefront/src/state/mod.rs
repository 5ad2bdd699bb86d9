//! # State Module
//!
//! Owns everything the product card reads and mutates.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ConfigState::from_env() ──► Storefront::from_config()                  │
//! │                                      │                                  │
//! │          ┌───────────────┬───────────┼───────────────┐                  │
//! │          ▼               ▼           ▼               ▼                  │
//! │  ┌──────────────┐ ┌────────────┐ ┌────────────┐ ┌──────────────┐        │
//! │  │   catalog    │ │    cart    │ │  counter   │ │   reviews    │        │
//! │  │ ProductCat.. │ │ Identity.. │ │ CounterCart│ │ ReviewColl.. │        │
//! │  └──────────────┘ └────────────┘ └────────────┘ └──────────────┘        │
//! │                                                                         │
//! │  One owner, one thread: commands take `&mut Storefront`.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod storefront;

pub use config::{default_product, ConfigError, ConfigState};
pub use storefront::Storefront;
