//! # shopware-admin-rs
//!
//! An async Rust client for the Shopware Admin API.
//!
//! The client authenticates with an integration's access key and secret key
//! using the OAuth2 client-credentials grant, caches the bearer token until
//! it expires, and exposes product listing and partial product updates.
//!
//! ## Features
//!
//! - **Authentication**: OAuth2 client credentials with a lazily refreshed token cache
//! - **Products**: paginated listing and PATCH-style partial updates
//! - **Transparent payloads**: response bodies are handed back as received
//! - **Errors with context**: every failed call carries its HTTP status and body
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shopware_admin::{ProductPatch, ShopwareClient};
//!
//! #[tokio::main]
//! async fn main() -> shopware_admin::Result<()> {
//!     let client = ShopwareClient::new(
//!         "SWIAXXXXXXXXXXXXXXXXXXXXXX",
//!         "secret-access-key",
//!         "https://shop.example.com/",
//!     )?;
//!
//!     // The first call authenticates on its own.
//!     let products = client.list_products(1, 1).await?;
//!     println!("{} products in total", products.total().unwrap_or(0));
//!
//!     if let Some(id) = products.first_id() {
//!         let result = client
//!             .update_product(id, ProductPatch::new().set("name", "Renamed"))
//!             .await?;
//!         println!("{:?}", result.message());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, Session};
pub use client::{ClientConfig, ShopwareClient};
pub use error::{Error, Result};
pub use models::{
    BaseUrl, ProductId, ProductListResponse, ProductPatch, UpdateConfirmation, UpdateResult,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use shopware_admin::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{ProductsQuery, ProductsService};
    pub use crate::auth::{Clock, Credentials, Session, SystemClock};
    pub use crate::client::{ClientConfig, ShopwareClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        BaseUrl, ProductId, ProductListResponse, ProductPatch, UpdateConfirmation, UpdateResult,
    };
}
