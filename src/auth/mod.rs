//! Authentication and session management for the Shopware Admin API.
//!
//! The Admin API uses the OAuth2 client-credentials grant: an integration's
//! access key and secret key are exchanged for a short-lived bearer token
//! (`POST /api/oauth/token`, HTTP Basic authentication). The [`Session`]
//! caches that token and re-authenticates once it expires.
//!
//! ```no_run
//! use shopware_admin::ShopwareClient;
//!
//! # async fn example() -> shopware_admin::Result<()> {
//! let client = ShopwareClient::new("SWIA...", "secret", "https://shop.example.com")?;
//!
//! // Force a token exchange up front; normally this happens lazily.
//! let token = client.authenticate().await?;
//! # Ok(())
//! # }
//! ```

mod clock;
mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use session::{Credentials, Session, TOKEN_PATH};
