//! # Sockshop Storefront Entry Point
//!
//! ## Usage
//! ```text
//! $ SOCKSHOP_PREMIUM=true sockshop-storefront
//! product
//! {"ok":true,"data":{"title":"Vue Mastery Socks", ... ,"shipping":"Free"}}
//! select 1
//! {"ok":true,"data":{ ... ,"inStock":false,"addToCartEnabled":false}}
//! quit
//! ```
//!
//! The setup lives in lib.rs for testability.

fn main() {
    if let Err(err) = sockshop_storefront_lib::run() {
        eprintln!("sockshop-storefront: {err}");
        std::process::exit(1);
    }
}
