//! HTTP client and service layer for the Shopware Admin API.
//!
//! This module provides the main entry point [`ShopwareClient`] for
//! interacting with the Shopware Admin API.
//!
//! # Example
//!
//! ```no_run
//! use shopware_admin::ShopwareClient;
//!
//! # async fn example() -> shopware_admin::Result<()> {
//! let client = ShopwareClient::new("access-key", "secret-key", "https://shop.example.com/")?;
//!
//! let page = client.products().list(25, 2).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::ClientConfig;
pub use http::ShopwareClient;
pub(crate) use http::{ClientInner, RawResponse};
