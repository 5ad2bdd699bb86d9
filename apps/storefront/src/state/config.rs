//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SOCKSHOP_*`)
//! 2. Catalog file named by `SOCKSHOP_CATALOG`
//! 3. Defaults (this file)
//!
//! Configuration is read once; nothing reloads it while the session runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sockshop_core::{
    CatalogError, Money, ProductCatalogEntry, ProductSpec, Variant, VariantId,
    STANDARD_SHIPPING_CENTS,
};
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable: `true`/`1`/`yes` makes shipping free.
pub const ENV_PREMIUM: &str = "SOCKSHOP_PREMIUM";
/// Environment variable: path to a JSON catalog file.
pub const ENV_CATALOG: &str = "SOCKSHOP_CATALOG";
/// Environment variable: standard shipping fee in cents.
pub const ENV_SHIPPING_CENTS: &str = "SOCKSHOP_SHIPPING_CENTS";

/// Failures while turning configuration into a product.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Premium customers ship for free.
    pub premium: bool,

    /// JSON catalog to load instead of the built-in product.
    pub catalog_path: Option<PathBuf>,

    /// Overrides the catalog's standard shipping fee.
    pub shipping_cents: Option<i64>,
}

impl Default for ConfigState {
    /// Development defaults: non-premium, built-in socks, catalog's own fee.
    fn default() -> Self {
        ConfigState {
            premium: false,
            catalog_path: None,
            shipping_cents: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from the process environment and defaults.
    ///
    /// ## Environment Variables
    /// - `SOCKSHOP_PREMIUM`: premium flag
    /// - `SOCKSHOP_CATALOG`: catalog file path
    /// - `SOCKSHOP_SHIPPING_CENTS`: shipping fee override
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(raw) = lookup(ENV_PREMIUM) {
            match parse_flag(&raw) {
                Some(premium) => config.premium = premium,
                None => warn!(value = %raw, "ignoring {}", ENV_PREMIUM),
            }
        }

        if let Some(path) = lookup(ENV_CATALOG).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup(ENV_SHIPPING_CENTS) {
            match raw.trim().parse::<i64>() {
                Ok(cents) if cents >= 0 => config.shipping_cents = Some(cents),
                _ => warn!(value = %raw, "ignoring {}", ENV_SHIPPING_CENTS),
            }
        }

        config
    }

    /// Builds the product on display.
    pub fn load_catalog(&self) -> Result<ProductCatalogEntry, ConfigError> {
        let mut spec = match &self.catalog_path {
            Some(path) => read_catalog_file(path)?,
            None => default_product(),
        };

        if let Some(cents) = self.shipping_cents {
            spec.standard_shipping = Money::from_cents(cents);
        }

        let entry = ProductCatalogEntry::new(spec)?;
        info!(
            title = %entry.title(),
            variants = entry.variants().len(),
            premium = self.premium,
            "catalog loaded"
        );
        Ok(entry)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn read_catalog_file(path: &Path) -> Result<ProductSpec, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The built-in product: two colors of socks, the blue pair sold out.
pub fn default_product() -> ProductSpec {
    ProductSpec {
        brand: "Vue Mastery".to_string(),
        name: "Socks".to_string(),
        description: "A pair of warm, fuzzy socks".to_string(),
        alt_text: "A pair of socks".to_string(),
        details: vec![
            "80% cotton".to_string(),
            "20% polyester".to_string(),
            "Gender-neutral".to_string(),
        ],
        sizes: ["35", "36", "37", "38"].map(String::from).to_vec(),
        on_sale: true,
        link: "https://www.amazon.com/s/ref=nb_sb_noss?url=search-alias%3Daps&field-keywords=socks"
            .to_string(),
        standard_shipping: Money::from_cents(STANDARD_SHIPPING_CENTS),
        variants: vec![
            Variant {
                variant_id: VariantId::new(2234),
                color: "green".to_string(),
                image: "https://www.vuemastery.com/images/challenges/vmSocks-green-onWhite.jpg"
                    .to_string(),
                quantity: Some(10),
            },
            Variant {
                variant_id: VariantId::new(2235),
                color: "blue".to_string(),
                image: "https://www.vuemastery.com/images/challenges/vmSocks-blue-onWhite.jpg"
                    .to_string(),
                quantity: Some(0),
            },
        ],
    }
}
